//! Generic named-amount rows shared by every plan section.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named amount line item: a debt, a saving, a recurring bill, a predicted
/// category spend, or a cash withdrawal.
///
/// The amount is kept as entered text; empty or unparseable text counts as
/// zero in every aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: String,
}

impl Row {
    /// A blank row with a fresh unique id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: String::new(),
            amount: String::new(),
        }
    }

    pub fn with_parts(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount: amount.into(),
        }
    }

    /// Numeric value of the amount text.
    pub fn amount_value(&self) -> f64 {
        parse_amount(&self.amount)
    }

    /// Structural copy with the amount cleared.
    pub fn cleared(&self) -> Row {
        Row {
            id: self.id.clone(),
            name: self.name.clone(),
            amount: String::new(),
        }
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

/// Field selector for row edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Name,
    Amount,
}

/// Actual weekly spend buckets mirroring one predicted row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyRow {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub weeks: [String; 4],
}

impl WeeklyRow {
    /// A fresh weekly row for the given predicted row, all buckets empty.
    pub fn for_row(row: &Row) -> Self {
        Self {
            id: row.id.clone(),
            name: row.name.clone(),
            weeks: Default::default(),
        }
    }

    pub fn week_value(&self, index: usize) -> f64 {
        self.weeks
            .get(index)
            .map(|week| parse_amount(week))
            .unwrap_or(0.0)
    }
}

/// Permissive amount parsing: anything that is not a finite number is zero.
pub fn parse_amount(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Sums the numeric amounts of a row list.
pub fn sum_amounts(rows: &[Row]) -> f64 {
    rows.iter().map(Row::amount_value).sum()
}
