mod product;
mod record;
mod slot;

pub use product::{Product, ProductId};
pub use record::{Choice, FillRecord, PurchaseRecord};
pub use slot::Slot;
