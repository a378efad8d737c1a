use std::fmt;
use std::str::FromStr;

use strsim::jaro_winkler;

use crate::error::{GmmError, Result};

/// Minimum similarity for an unknown choice keyword to get a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// How a purchase selects its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Protein,
    Carb,
    Fat,
    Calorie,
    Number,
}

impl Choice {
    pub const ALL: [Choice; 5] = [
        Choice::Protein,
        Choice::Carb,
        Choice::Fat,
        Choice::Calorie,
        Choice::Number,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Choice::Protein => "PROTEIN",
            Choice::Carb => "CARB",
            Choice::Fat => "FAT",
            Choice::Calorie => "CALORIE",
            Choice::Number => "NUMBER",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Choice {
    type Err = GmmError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(choice) = Choice::ALL.into_iter().find(|c| c.keyword() == s) {
            return Ok(choice);
        }

        let upper = s.to_uppercase();
        let suggestion = Choice::ALL
            .into_iter()
            .map(|c| (c, jaro_winkler(&upper, c.keyword())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(c, _)| c.keyword().to_string());

        Err(GmmError::UnknownChoice {
            value: s.to_string(),
            suggestion,
        })
    }
}

/// One unit of a product to stock: `name<TAB>price<TAB>protein carbohydrate fat`.
#[derive(Debug, Clone, PartialEq)]
pub struct FillRecord {
    pub name: String,
    pub price: u32,
    pub protein: f64,
    pub carbohydrate: f64,
    pub fat: f64,
}

impl FillRecord {
    pub fn from_fields(fields: &[&str]) -> Result<Self> {
        let [name, price, macros, ..] = fields else {
            return Err(invalid(format!(
                "expected 3 tab-separated fields, found {}",
                fields.len()
            )));
        };

        let price = parse_field::<u32>(price, "price")?;
        let macros: Vec<f64> = macros
            .split_whitespace()
            .map(|m| parse_field::<f64>(m, "macro"))
            .collect::<Result<_>>()?;
        let &[protein, carbohydrate, fat] = macros.as_slice() else {
            return Err(invalid(format!(
                "expected 3 macro values, found {}",
                macros.len()
            )));
        };

        if [protein, carbohydrate, fat].iter().any(|v| *v < 0.0 || !v.is_finite()) {
            return Err(invalid("macro values must be non-negative".to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            price,
            protein,
            carbohydrate,
            fat,
        })
    }
}

impl FromStr for FillRecord {
    type Err = GmmError;

    fn from_str(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split('\t').collect();
        Self::from_fields(&fields)
    }
}

/// A purchase request: `mode<TAB>d1 d2 ...<TAB>CHOICE<TAB>value`.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRecord {
    /// The record exactly as read, echoed into the transaction log.
    pub raw: String,

    /// Payment mode tag (always `CASH` in practice; not interpreted).
    pub mode: String,

    /// Denominations as tendered, accepted or not.
    pub denominations: Vec<i64>,

    pub choice: Choice,

    /// Nutrient target or slot number, depending on `choice`.
    pub value: i64,
}

impl PurchaseRecord {
    /// Build a record from its parts, formatting `raw` as it would appear in a file.
    pub fn new(mode: &str, denominations: Vec<i64>, choice: Choice, value: i64) -> Self {
        let money: Vec<String> = denominations.iter().map(|d| d.to_string()).collect();
        Self {
            raw: format!("{}\t{}\t{}\t{}", mode, money.join(" "), choice, value),
            mode: mode.to_string(),
            denominations,
            choice,
            value,
        }
    }

    pub fn from_fields(fields: &[&str]) -> Result<Self> {
        let [mode, money, choice, value, ..] = fields else {
            return Err(invalid(format!(
                "expected 4 tab-separated fields, found {}",
                fields.len()
            )));
        };

        let denominations = money
            .split_whitespace()
            .map(|d| parse_field::<i64>(d, "denomination"))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            raw: fields.join("\t"),
            mode: mode.to_string(),
            denominations,
            choice: choice.parse()?,
            value: parse_field::<i64>(value, "value")?,
        })
    }
}

impl FromStr for PurchaseRecord {
    type Err = GmmError;

    fn from_str(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split('\t').collect();
        Self::from_fields(&fields)
    }
}

fn parse_field<T: FromStr>(raw: &str, what: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| invalid(format!("invalid {} '{}'", what, raw)))
}

fn invalid(reason: String) -> GmmError {
    GmmError::InvalidRecord(reason)
}
