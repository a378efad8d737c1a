use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, QuoteStyle, ReaderBuilder, WriterBuilder};
use log::{info, warn};

use crate::error::{GmmError, Result};
use crate::models::{FillRecord, PurchaseRecord};

/// Load fill records from a tab-delimited file.
///
/// Malformed lines are logged and skipped.
pub fn load_fill_records<P: AsRef<Path>>(path: P) -> Result<Vec<FillRecord>> {
    let reader = reader_builder().from_path(path.as_ref())?;
    let records = read_records(reader, FillRecord::from_fields)?;
    info!("Loaded {} fill records from {:?}", records.len(), path.as_ref());
    Ok(records)
}

/// Load purchase records from a tab-delimited file.
///
/// Malformed lines are logged and skipped.
pub fn load_purchase_records<P: AsRef<Path>>(path: P) -> Result<Vec<PurchaseRecord>> {
    let reader = reader_builder().from_path(path.as_ref())?;
    let records = read_records(reader, PurchaseRecord::from_fields)?;
    info!("Loaded {} purchase records from {:?}", records.len(), path.as_ref());
    Ok(records)
}

/// Parse fill records from in-memory text.
pub fn parse_fill_records(content: &str) -> Result<Vec<FillRecord>> {
    read_records(reader_builder().from_reader(content.as_bytes()), FillRecord::from_fields)
}

/// Parse purchase records from in-memory text.
pub fn parse_purchase_records(content: &str) -> Result<Vec<PurchaseRecord>> {
    read_records(
        reader_builder().from_reader(content.as_bytes()),
        PurchaseRecord::from_fields,
    )
}

/// Write fill records in the same format they are loaded from.
pub fn save_fill_records<P: AsRef<Path>>(path: P, records: &[FillRecord]) -> Result<()> {
    let mut wtr = writer_builder().from_path(path)?;
    for record in records {
        wtr.write_record([
            record.name.clone(),
            record.price.to_string(),
            format!("{} {} {}", record.protein, record.carbohydrate, record.fat),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write purchase records in the same format they are loaded from.
pub fn save_purchase_records<P: AsRef<Path>>(path: P, records: &[PurchaseRecord]) -> Result<()> {
    let mut wtr = writer_builder().from_path(path)?;
    for record in records {
        wtr.write_record(record.raw.split('\t'))?;
    }
    wtr.flush()?;
    Ok(())
}

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false);
    builder
}

fn writer_builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never);
    builder
}

fn read_records<R, T, F>(mut reader: csv::Reader<R>, parse: F) -> Result<Vec<T>>
where
    R: Read,
    F: Fn(&[&str]) -> Result<T>,
{
    let mut records = Vec::new();
    let mut row = ByteRecord::new();

    // Raw bytes, so a line with invalid UTF-8 is skipped like any other bad line.
    while reader.read_byte_record(&mut row)? {
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let parsed = row
            .iter()
            .map(std::str::from_utf8)
            .collect::<std::result::Result<Vec<&str>, _>>()
            .map_err(|e| GmmError::InvalidRecord(format!("invalid UTF-8: {}", e)))
            .and_then(|fields| parse(&fields));

        match parsed {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping line {}: {}", line, e),
        }
    }

    Ok(records)
}
