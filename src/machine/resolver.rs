use log::debug;

use crate::machine::constants::{MATCH_TOLERANCE, SLOT_COUNT, is_accepted_denomination};
use crate::machine::{Event, Journal, Machine};
use crate::models::{Choice, PurchaseRecord};

/// Cash offered for one purchase, split into accepted and rejected denominations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tender {
    /// Sum of accepted denominations.
    pub accepted_total: u32,

    /// Distinct rejected denominations, in the order first tendered.
    pub rejected: Vec<i64>,
}

impl Tender {
    pub fn from_denominations(denominations: &[i64]) -> Self {
        let mut tender = Tender::default();
        for &amount in denominations {
            if is_accepted_denomination(amount) {
                tender.accepted_total += amount as u32;
            } else if !tender.rejected.contains(&amount) {
                tender.rejected.push(amount);
            }
        }
        tender
    }
}

/// What happened to a single purchase request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Dispensed { slot: usize, change: u32 },
    /// The selected slot's product costs more than was tendered.
    InsufficientFunds { slot: usize },
    /// No stocked slot matched the nutrient window.
    NotFound,
    /// Slot number outside the grid.
    NumberRejected,
    SlotEmpty { slot: usize },
}

impl PurchaseOutcome {
    pub fn is_dispensed(&self) -> bool {
        matches!(self, PurchaseOutcome::Dispensed { .. })
    }
}

/// A processed purchase record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub tender: Tender,
    pub outcome: PurchaseOutcome,
}

impl Receipt {
    /// Dispensed with no rejected denominations.
    pub fn is_clean(&self) -> bool {
        self.outcome.is_dispensed() && self.tender.rejected.is_empty()
    }
}

/// Result of a purchase batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseStatus {
    AllDispensed,
    /// At least one record was refused or tendered unaccepted money.
    HadIssues,
}

impl PurchaseStatus {
    /// Legacy numeric status: 0 or -1.
    pub fn code(self) -> i32 {
        match self {
            PurchaseStatus::AllDispensed => 0,
            PurchaseStatus::HadIssues => -1,
        }
    }
}

impl Machine {
    /// Process purchase records in order against the current stock.
    pub fn purchase(&mut self, records: &[PurchaseRecord], journal: &mut Journal) -> PurchaseStatus {
        let mut status = PurchaseStatus::AllDispensed;
        for record in records {
            if !self.purchase_one(record, journal).is_clean() {
                status = PurchaseStatus::HadIssues;
            }
        }
        status
    }

    /// Resolve one purchase record, logging the input line and its outcome.
    pub fn purchase_one(&mut self, record: &PurchaseRecord, journal: &mut Journal) -> Receipt {
        let tender = Tender::from_denominations(&record.denominations);

        journal.record(Event::Input {
            line: record.raw.clone(),
        });
        for &amount in &tender.rejected {
            journal.record(Event::RejectedDenomination { amount });
        }

        let outcome = match record.choice {
            Choice::Number => self.select_by_number(record.value, tender.accepted_total, journal),
            choice => self.select_by_nutrient(choice, record.value, tender.accepted_total, journal),
        };

        Receipt { tender, outcome }
    }

    /// The first stocked slot (row-major) whose product lies within the window wins,
    /// whether or not it is affordable.
    fn select_by_nutrient(
        &mut self,
        choice: Choice,
        target: i64,
        tendered: u32,
        journal: &mut Journal,
    ) -> PurchaseOutcome {
        let target = target as f64;
        let window = (target - MATCH_TOLERANCE)..=(target + MATCH_TOLERANCE);

        let hit = self
            .grid
            .iter()
            .filter(|(_, slot)| slot.is_stocked())
            .find(|(_, slot)| {
                self.product_in(slot)
                    .and_then(|p| p.value_for(choice))
                    .is_some_and(|v| window.contains(&v))
            })
            .map(|(index, _)| index);

        match hit {
            Some(index) => self.settle(index, tendered, journal),
            None => {
                refund(journal, Event::ProductNotFound, tendered);
                PurchaseOutcome::NotFound
            }
        }
    }

    fn select_by_number(&mut self, number: i64, tendered: u32, journal: &mut Journal) -> PurchaseOutcome {
        if !(0..SLOT_COUNT as i64).contains(&number) {
            refund(journal, Event::NumberNotAccepted, tendered);
            return PurchaseOutcome::NumberRejected;
        }

        let index = number as usize;
        if !self.grid.get(index).is_some_and(|s| s.is_stocked()) {
            refund(journal, Event::SlotEmpty, tendered);
            return PurchaseOutcome::SlotEmpty { slot: index };
        }

        self.settle(index, tendered, journal)
    }

    /// Sell one unit from a stocked slot if the money covers the price.
    fn settle(&mut self, index: usize, tendered: u32, journal: &mut Journal) -> PurchaseOutcome {
        let Some((name, price)) = self
            .grid
            .get(index)
            .and_then(|slot| self.product_in(slot))
            .map(|p| (p.name.clone(), p.price))
        else {
            refund(journal, Event::SlotEmpty, tendered);
            return PurchaseOutcome::SlotEmpty { slot: index };
        };

        if price > tendered {
            refund(journal, Event::InsufficientFunds, tendered);
            return PurchaseOutcome::InsufficientFunds { slot: index };
        }

        if let Some(slot) = self.grid.get_mut(index) {
            slot.capacity -= 1;
        }
        let change = tendered - price;
        debug!("sold {} from slot {}, change {}", name, index, change);

        journal.record(Event::Purchased { product: name });
        journal.record(Event::Change { amount: change });
        PurchaseOutcome::Dispensed {
            slot: index,
            change,
        }
    }
}

fn refund(journal: &mut Journal, reason: Event, tendered: u32) {
    journal.record(reason);
    journal.record(Event::Change { amount: tendered });
}
