//! Random record batches for load testing and property checks.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::machine::constants::{ACCEPTED_DENOMINATIONS, SLOT_COUNT};
use crate::models::{Choice, FillRecord, PurchaseRecord};

/// Denominations a careless customer might try.
const REJECTED_DENOMINATIONS: [i64; 4] = [2, 3, 25, 500];

/// Shape of a generated batch.
#[derive(Debug, Clone)]
pub struct BatchShape {
    /// Distinct product names to draw fill records from.
    pub catalogue_size: usize,
    pub fills: usize,
    pub purchases: usize,
    /// Probability that a purchase also tenders one unaccepted denomination.
    pub rejected_money_rate: f64,
}

impl Default for BatchShape {
    fn default() -> Self {
        Self {
            catalogue_size: 30,
            fills: 200,
            purchases: 50,
            rejected_money_rate: 0.1,
        }
    }
}

/// Round to one decimal place, as macros are usually printed.
fn tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A catalogue of distinct products to stock from.
pub fn random_catalogue(rng: &mut impl Rng, size: usize) -> Vec<FillRecord> {
    (0..size)
        .map(|i| FillRecord {
            name: format!("Item{:02}", i),
            price: rng.gen_range(5..=60),
            protein: tenth(rng.gen_range(0.0..40.0)),
            carbohydrate: tenth(rng.gen_range(0.0..60.0)),
            fat: tenth(rng.gen_range(0.0..25.0)),
        })
        .collect()
}

/// Fill records drawn with replacement from a fresh catalogue.
pub fn random_fill_records(rng: &mut impl Rng, shape: &BatchShape) -> Vec<FillRecord> {
    let catalogue = random_catalogue(rng, shape.catalogue_size.max(1));
    (0..shape.fills)
        .filter_map(|_| catalogue.choose(rng).cloned())
        .collect()
}

/// Purchase records across every choice, with occasional bad money and bad slot numbers.
pub fn random_purchase_records(rng: &mut impl Rng, shape: &BatchShape) -> Vec<PurchaseRecord> {
    (0..shape.purchases)
        .map(|_| {
            let mut denominations: Vec<i64> = (0..rng.gen_range(1..=3))
                .filter_map(|_| ACCEPTED_DENOMINATIONS.choose(rng).copied())
                .collect();
            if rng.gen_bool(shape.rejected_money_rate) {
                denominations.extend(REJECTED_DENOMINATIONS.choose(rng));
            }

            let choice = *Choice::ALL.choose(rng).unwrap_or(&Choice::Number);
            let value = match choice {
                Choice::Protein => rng.gen_range(0..40),
                Choice::Carb => rng.gen_range(0..60),
                Choice::Fat => rng.gen_range(0..25),
                Choice::Calorie => rng.gen_range(0..700),
                Choice::Number => rng.gen_range(-2..SLOT_COUNT as i64 + 2),
            };

            PurchaseRecord::new("CASH", denominations, choice, value)
        })
        .collect()
}
