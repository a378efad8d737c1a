use crate::machine::constants::SLOT_CAPACITY;
use crate::models::ProductId;

/// One cell of the machine. Once a product is assigned it never changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slot {
    pub product: Option<ProductId>,

    /// Units currently held, in `0..=SLOT_CAPACITY`.
    pub capacity: u8,
}

impl Slot {
    #[inline]
    pub fn is_unassigned(&self) -> bool {
        self.product.is_none()
    }

    /// Holds a product and at least one unit of it.
    #[inline]
    pub fn is_stocked(&self) -> bool {
        self.product.is_some() && self.capacity > 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.capacity >= SLOT_CAPACITY
    }

    /// Whether one more unit of `id` may go into this slot.
    pub fn accepts(&self, id: ProductId) -> bool {
        match self.product {
            None => true,
            Some(held) => held == id && !self.is_full(),
        }
    }
}
