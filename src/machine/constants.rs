// ─────────────────────────────────────────────────────────────────────────────
// Machine geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Number of slot rows.
pub const ROWS: usize = 6;

/// Number of slot columns.
pub const COLUMNS: usize = 4;

/// Total slots, addressed row-major as `row * COLUMNS + column`.
pub const SLOT_COUNT: usize = ROWS * COLUMNS;

/// Maximum units a single slot holds.
pub const SLOT_CAPACITY: u8 = 10;

// ─────────────────────────────────────────────────────────────────────────────
// Purchasing
// ─────────────────────────────────────────────────────────────────────────────

/// Bank notes and coins the machine accepts.
pub const ACCEPTED_DENOMINATIONS: [i64; 7] = [1, 5, 10, 20, 50, 100, 200];

/// Half-width of the inclusive window a nutrient choice matches within.
pub const MATCH_TOLERANCE: f64 = 5.0;

/// Currency suffix used in the transaction log.
pub const CURRENCY: &str = "TL";

// ─────────────────────────────────────────────────────────────────────────────
// Nutrition
// ─────────────────────────────────────────────────────────────────────────────

pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const CARB_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Whether a tendered denomination is legal tender for the machine.
#[inline]
pub fn is_accepted_denomination(amount: i64) -> bool {
    ACCEPTED_DENOMINATIONS.contains(&amount)
}
