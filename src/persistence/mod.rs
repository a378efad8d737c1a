mod journal;
mod records;

pub use journal::save_journal;
pub use records::{
    load_fill_records, load_purchase_records, parse_fill_records, parse_purchase_records,
    save_fill_records, save_purchase_records,
};
