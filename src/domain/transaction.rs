use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::CategoryKind;

/// A dated, categorised income or expense entry.
///
/// Amounts are stored non-negative; the sign of the contribution is always
/// derived from `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    pub amount: f64,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        kind: CategoryKind,
        amount: f64,
        category_id: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            amount: amount.max(0.0),
            category_id: category_id.into(),
            description: None,
            date,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Contribution with the sign implied by the transaction kind.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            CategoryKind::Income => self.amount,
            CategoryKind::Expense => -self.amount,
        }
    }
}
