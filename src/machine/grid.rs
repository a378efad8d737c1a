use crate::machine::constants::{COLUMNS, ROWS, SLOT_COUNT};
use crate::models::{ProductId, Slot};

/// The fixed 6×4 slot array. Every search walks it in row-major order.
#[derive(Debug, Clone)]
pub struct SlotGrid {
    slots: [Slot; SLOT_COUNT],
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self {
            slots: [Slot::default(); SLOT_COUNT],
        }
    }
}

impl SlotGrid {
    /// A grid with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// `(row, column)` of a row-major slot index.
    #[inline]
    pub fn position(index: usize) -> (usize, usize) {
        (index / COLUMNS, index % COLUMNS)
    }

    #[inline]
    pub fn index_of(row: usize, column: usize) -> usize {
        debug_assert!(row < ROWS && column < COLUMNS);
        row * COLUMNS + column
    }

    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    pub fn at(&self, row: usize, column: usize) -> &Slot {
        &self.slots[Self::index_of(row, column)]
    }

    /// Slots with their indices, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Slot)> {
        self.slots.iter().enumerate()
    }

    /// One row of slots.
    pub fn row(&self, row: usize) -> &[Slot] {
        &self.slots[row * COLUMNS..(row + 1) * COLUMNS]
    }

    /// First slot (row-major) that can take one more unit of `id`.
    pub fn first_accepting(&self, id: ProductId) -> Option<usize> {
        self.slots.iter().position(|slot| slot.accepts(id))
    }

    pub fn full_slot_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_full()).count()
    }

    /// Units currently held across all slots.
    pub fn total_units(&self) -> u32 {
        self.slots.iter().map(|s| s.capacity as u32).sum()
    }
}
