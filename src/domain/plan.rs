//! Month-keyed plan snapshots and their row sections.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::row::{parse_amount, Row, RowField};

/// Calendar month identifier with a zero-based month index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month0: u32,
}

impl MonthKey {
    pub fn new(year: i32, month0: u32) -> Self {
        Self { year, month0 }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    /// Key under which this month's snapshot is persisted.
    pub fn storage_key(&self) -> String {
        format!("planner-{}-{}", self.year, self.month0)
    }

    /// The month immediately before this one, rolling the year backwards.
    pub fn previous(&self) -> Self {
        if self.month0 == 0 {
            Self {
                year: self.year - 1,
                month0: 11,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 - 1,
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month0 + 1)
    }
}

/// Plan sections backed by generic rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSection {
    Debts,
    Savings,
    RecurringDebts,
    RecurringSavings,
    RecurringOther,
    Predicted,
    Cash,
}

/// The complete set of user-entered planning rows and scalars for one
/// calendar month.
///
/// Every field defaults when absent from a stored blob, so partial data
/// always deserializes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlanSnapshot {
    #[serde(default, rename = "netIncome")]
    pub net_income: String,
    #[serde(default, rename = "prevOver")]
    pub prev_over: String,
    #[serde(default)]
    pub debts: Vec<Row>,
    #[serde(default)]
    pub savings: Vec<Row>,
    #[serde(default, rename = "regDebts")]
    pub reg_debts: Vec<Row>,
    #[serde(default, rename = "regSavings")]
    pub reg_savings: Vec<Row>,
    #[serde(default, rename = "regOther")]
    pub reg_other: Vec<Row>,
    #[serde(default)]
    pub predicted: Vec<Row>,
    #[serde(default)]
    pub cash: Vec<Row>,
    /// Autofill percentages keyed by predicted row id. Optional: an empty
    /// map simply disables percentage allocation.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub percents: BTreeMap<String, f64>,
}

impl PlanSnapshot {
    pub fn rows(&self, section: PlanSection) -> &[Row] {
        match section {
            PlanSection::Debts => &self.debts,
            PlanSection::Savings => &self.savings,
            PlanSection::RecurringDebts => &self.reg_debts,
            PlanSection::RecurringSavings => &self.reg_savings,
            PlanSection::RecurringOther => &self.reg_other,
            PlanSection::Predicted => &self.predicted,
            PlanSection::Cash => &self.cash,
        }
    }

    pub fn rows_mut(&mut self, section: PlanSection) -> &mut Vec<Row> {
        match section {
            PlanSection::Debts => &mut self.debts,
            PlanSection::Savings => &mut self.savings,
            PlanSection::RecurringDebts => &mut self.reg_debts,
            PlanSection::RecurringSavings => &mut self.reg_savings,
            PlanSection::RecurringOther => &mut self.reg_other,
            PlanSection::Predicted => &mut self.predicted,
            PlanSection::Cash => &mut self.cash,
        }
    }

    /// Appends a blank row to the section and returns its id.
    pub fn add_row(&mut self, section: PlanSection) -> String {
        let row = Row::new();
        let id = row.id.clone();
        self.rows_mut(section).push(row);
        id
    }

    /// Edits one field of the row with the given id; unknown ids are ignored.
    pub fn update_row(&mut self, section: PlanSection, id: &str, field: RowField, value: &str) {
        if let Some(row) = self.rows_mut(section).iter_mut().find(|row| row.id == id) {
            match field {
                RowField::Name => row.name = value.into(),
                RowField::Amount => row.amount = value.into(),
            }
        }
    }

    /// Removes the row with the given id if present.
    pub fn delete_row(&mut self, section: PlanSection, id: &str) {
        self.rows_mut(section).retain(|row| row.id != id);
    }

    /// User-entered net income, or `None` when the field is blank and the
    /// ledger-derived figure should be used instead.
    pub fn entered_net_income(&self) -> Option<f64> {
        let text = self.net_income.trim();
        if text.is_empty() {
            None
        } else {
            Some(parse_amount(text))
        }
    }

    pub fn prev_over_value(&self) -> f64 {
        parse_amount(&self.prev_over)
    }

    pub fn percent_for(&self, id: &str) -> f64 {
        self.percents.get(id).copied().unwrap_or(0.0)
    }

    /// Structural copy for a new month: row identities and names survive,
    /// amounts and the overspend scalar do not. Percentages are structure,
    /// not amounts, and carry over unchanged.
    pub fn carried_forward(&self) -> PlanSnapshot {
        let clear = |rows: &[Row]| -> Vec<Row> { rows.iter().map(Row::cleared).collect() };
        PlanSnapshot {
            net_income: String::new(),
            prev_over: String::new(),
            debts: clear(&self.debts),
            savings: clear(&self.savings),
            reg_debts: clear(&self.reg_debts),
            reg_savings: clear(&self.reg_savings),
            reg_other: clear(&self.reg_other),
            predicted: clear(&self.predicted),
            cash: clear(&self.cash),
            percents: self.percents.clone(),
        }
    }
}
