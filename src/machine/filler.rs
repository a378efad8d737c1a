use log::debug;

use crate::machine::constants::SLOT_COUNT;
use crate::machine::{Event, Journal, Machine};
use crate::models::FillRecord;

/// Result of a fill batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStatus {
    /// Every record was processed.
    Completed,
    /// Processing stopped early because all slots were full.
    MachineFull,
}

impl FillStatus {
    /// Legacy numeric status: 0 or -1.
    pub fn code(self) -> i32 {
        match self {
            FillStatus::Completed => 0,
            FillStatus::MachineFull => -1,
        }
    }
}

impl Machine {
    /// Stock one unit per record, first-fit in row-major order.
    ///
    /// A unit goes into the first slot that is either unassigned or already holds
    /// the same product below capacity. Units that fit nowhere are reported and
    /// dropped. Once a placement fails while every slot is full, the rest of the
    /// batch is abandoned.
    pub fn fill(&mut self, records: &[FillRecord], journal: &mut Journal) -> FillStatus {
        // Counted on the 9 -> 10 transition only.
        let mut full_slots = 0;

        for record in records {
            let (id, created) = self.registry.resolve(record);
            if !created {
                self.registry.get_mut(id).amount += 1;
            }

            let placed = self
                .grid
                .first_accepting(id)
                .and_then(|index| self.grid.get_mut(index).map(|slot| (index, slot)));

            match placed {
                Some((index, slot)) => {
                    if slot.is_unassigned() {
                        slot.product = Some(id);
                        slot.capacity = 1;
                    } else {
                        slot.capacity += 1;
                        if slot.is_full() {
                            full_slots += 1;
                        }
                    }
                    debug!(
                        "placed {} in slot {} ({} units)",
                        record.name, index, slot.capacity
                    );
                }
                None => {
                    let name = self.registry.get(id).name.clone();
                    debug!("no room for {}", name);
                    journal.record(Event::NoPlacement { product: name });

                    if full_slots == SLOT_COUNT {
                        journal.record(Event::MachineFull);
                        return FillStatus::MachineFull;
                    }
                }
            }
        }

        FillStatus::Completed
    }
}
