//! Domain types representing ledger categories.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categorises ledger activity for planning and reporting.
///
/// Referenced by id from transactions and plan rows. The reference is weak:
/// deleting a category leaves referrers in place, and lookups for the missing
/// id simply come back empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            kind,
        }
    }

    /// Builds a category with a caller-chosen id, e.g. for seeded defaults.
    pub fn with_id(id: impl Into<String>, name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}

/// Supported category types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CategoryKind::Income => "Income",
            CategoryKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_kind_in_wire_casing() {
        let category = Category::with_id("salary", "Salary", CategoryKind::Income);
        let json = serde_json::to_string(&category).expect("serialize category");
        assert!(json.contains("\"type\":\"income\""), "unexpected json: {json}");
    }

    #[test]
    fn fresh_categories_get_unique_ids() {
        let a = Category::new("Groceries", CategoryKind::Expense);
        let b = Category::new("Groceries", CategoryKind::Expense);
        assert_ne!(a.id, b.id);
    }
}
