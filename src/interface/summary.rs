use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::machine::{FillStatus, Machine, PurchaseStatus, SlotGrid};

#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub name: String,
    pub price: u32,
    pub protein: f64,
    pub carbohydrate: f64,
    pub fat: f64,
    pub calorie: i64,
    pub amount: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotSummary {
    pub index: usize,
    pub row: usize,
    pub column: usize,
    pub product: Option<String>,
    pub capacity: u8,
}

/// Machine state after a run, for machine-readable inspection.
#[derive(Debug, Clone, Serialize)]
pub struct MachineSummary {
    pub fill_status: i32,
    pub purchase_status: i32,
    pub units_in_stock: u32,
    pub products: Vec<ProductSummary>,
    pub slots: Vec<SlotSummary>,
}

impl MachineSummary {
    pub fn new(machine: &Machine, fill: FillStatus, purchase: PurchaseStatus) -> Self {
        let products = machine
            .registry()
            .iter()
            .map(|p| ProductSummary {
                name: p.name.clone(),
                price: p.price,
                protein: p.protein,
                carbohydrate: p.carbohydrate,
                fat: p.fat,
                calorie: p.rounded_calorie(),
                amount: p.amount,
            })
            .collect();

        let slots = machine
            .grid()
            .iter()
            .map(|(index, slot)| {
                let (row, column) = SlotGrid::position(index);
                SlotSummary {
                    index,
                    row,
                    column,
                    product: machine.product_in(slot).map(|p| p.name.clone()),
                    capacity: slot.capacity,
                }
            })
            .collect();

        Self {
            fill_status: fill.code(),
            purchase_status: purchase.code(),
            units_in_stock: machine.grid().total_units(),
            products,
            slots,
        }
    }
}

/// Write a summary as pretty-printed JSON.
pub fn write_summary<P: AsRef<Path>>(path: P, summary: &MachineSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json)?;
    Ok(())
}
