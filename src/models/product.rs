use crate::machine::constants::{CARB_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM};
use crate::models::Choice;

/// Index of a product in the registry; slots refer to products through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub usize);

/// A stockable product with its macros and derived calorie value.
#[derive(Debug, Clone)]
pub struct Product {
    pub name: String,

    /// Unit price in whole currency units.
    pub price: u32,

    pub protein: f64,
    pub carbohydrate: f64,
    pub fat: f64,

    /// 4·protein + 4·carbohydrate + 9·fat, kept unrounded.
    pub calorie: f64,

    /// Number of units ever filed for this product.
    pub amount: u32,
}

impl Product {
    /// A freshly registered product always starts with an amount of 1.
    pub fn new(name: impl Into<String>, price: u32, protein: f64, carbohydrate: f64, fat: f64) -> Self {
        Self {
            name: name.into(),
            price,
            protein,
            carbohydrate,
            fat,
            calorie: PROTEIN_KCAL_PER_GRAM * protein
                + CARB_KCAL_PER_GRAM * carbohydrate
                + FAT_KCAL_PER_GRAM * fat,
            amount: 1,
        }
    }

    /// Calorie value as shown on the machine display.
    #[inline]
    pub fn rounded_calorie(&self) -> i64 {
        self.calorie.round() as i64
    }

    /// The attribute a nutrient-based choice compares against.
    ///
    /// Returns `None` for [`Choice::Number`], which selects by slot index.
    pub fn value_for(&self, choice: Choice) -> Option<f64> {
        match choice {
            Choice::Protein => Some(self.protein),
            Choice::Carb => Some(self.carbohydrate),
            Choice::Fat => Some(self.fat),
            Choice::Calorie => Some(self.calorie),
            Choice::Number => None,
        }
    }
}
