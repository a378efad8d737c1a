use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::machine::Journal;

/// Write the transaction log, replacing any previous file.
pub fn save_journal<P: AsRef<Path>>(path: P, journal: &Journal) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for entry in journal.entries() {
        write!(out, "{}", entry)?;
    }
    out.flush()?;
    Ok(())
}
