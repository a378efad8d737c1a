use std::fmt;

use crate::machine::constants::CURRENCY;

/// A line of the transaction log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// No slot could take another unit of the product.
    NoPlacement { product: String },
    MachineFull,
    /// A purchase record echoed verbatim.
    Input { line: String },
    RejectedDenomination { amount: i64 },
    Purchased { product: String },
    /// Money handed back, either change or the whole tendered sum.
    Change { amount: u32 },
    InsufficientFunds,
    ProductNotFound,
    NumberNotAccepted,
    SlotEmpty,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::NoPlacement { product } => {
                write!(f, "INFO: There is no available place to put {}", product)
            }
            Event::MachineFull => f.write_str("INFO: The machine is full!"),
            Event::Input { line } => write!(f, "INPUT: {}", line),
            Event::RejectedDenomination { amount } => {
                write!(f, "INFO: The machine does not accept {} {}.", amount, CURRENCY)
            }
            Event::Purchased { product } => write!(f, "PURCHASE: You have bought one {}", product),
            Event::Change { amount } => {
                write!(f, "RETURN: Returning your change: {} {}", amount, CURRENCY)
            }
            Event::InsufficientFunds => {
                f.write_str("INFO: Insufficient money, try again with more money.")
            }
            Event::ProductNotFound => {
                f.write_str("INFO: Product not found, your money will be returned.")
            }
            Event::NumberNotAccepted => f.write_str(
                "INFO: Number cannot be accepted. Please try again with another number.",
            ),
            Event::SlotEmpty => f.write_str("INFO: This slot is empty, your money will be returned."),
        }
    }
}

/// An entry of the journal: a single event line or a rendered snapshot block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Event(Event),
    /// Pre-rendered, newline-terminated text.
    Snapshot(String),
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Event(event) => writeln!(f, "{}", event),
            Entry::Snapshot(text) => f.write_str(text),
        }
    }
}

/// Append-only, in-memory transaction log for one run.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Vec<Entry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: Event) {
        self.entries.push(Entry::Event(event));
    }

    pub fn record_snapshot(&mut self, text: String) {
        self.entries.push(Entry::Snapshot(text));
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Events only, in order, skipping snapshots.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Event(event) => Some(event),
            Entry::Snapshot(_) => None,
        })
    }

    /// Lines exactly as they appear in the log file.
    pub fn render(&self) -> String {
        self.entries.iter().map(|e| e.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_text() {
        assert_eq!(
            Event::Change { amount: 5 }.to_string(),
            "RETURN: Returning your change: 5 TL"
        );
        assert_eq!(
            Event::RejectedDenomination { amount: 3 }.to_string(),
            "INFO: The machine does not accept 3 TL."
        );
        assert_eq!(
            Event::NoPlacement {
                product: "Shake".to_string()
            }
            .to_string(),
            "INFO: There is no available place to put Shake"
        );
    }

    #[test]
    fn test_render_interleaves_snapshots() {
        let mut journal = Journal::new();
        journal.record(Event::MachineFull);
        journal.record_snapshot("-----\n".to_string());
        journal.record(Event::ProductNotFound);

        assert_eq!(journal.len(), 3);
        assert_eq!(journal.events().count(), 2);
        assert_eq!(
            journal.render(),
            "INFO: The machine is full!\n-----\nINFO: Product not found, your money will be returned.\n"
        );
    }
}
