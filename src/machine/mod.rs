pub mod constants;
pub mod events;
pub mod filler;
pub mod grid;
pub mod registry;
pub mod resolver;

pub use events::{Entry, Event, Journal};
pub use filler::FillStatus;
pub use grid::SlotGrid;
pub use registry::ProductRegistry;
pub use resolver::{PurchaseOutcome, PurchaseStatus, Receipt, Tender};

use crate::models::{Product, Slot};

/// The whole machine state for one batch: the slot grid and the products in it.
#[derive(Debug, Clone, Default)]
pub struct Machine {
    registry: ProductRegistry,
    grid: SlotGrid,
}

impl Machine {
    /// An empty machine.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &ProductRegistry {
        &self.registry
    }

    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    /// Product held by a slot, if any.
    pub fn product_in(&self, slot: &Slot) -> Option<&Product> {
        slot.product.map(|id| self.registry.get(id))
    }
}

#[cfg(test)]
impl Machine {
    /// Move a slot's contents elsewhere, leaving the source unassigned.
    pub(crate) fn relocate_slot(&mut self, from: usize, to: usize) {
        let slot = self.grid.get_mut(from).map(std::mem::take).unwrap_or_default();
        if let Some(target) = self.grid.get_mut(to) {
            *target = slot;
        }
    }
}
