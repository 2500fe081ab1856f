//! The transaction ledger: category definitions plus dated entries.

use serde::{Deserialize, Serialize};

use crate::domain::category::{Category, CategoryKind};
use crate::domain::transaction::Transaction;

/// Key under which the serialized ledger blob is persisted.
pub const LEDGER_STORAGE_KEY: &str = "budget-data";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger seeded with the starter category set.
    pub fn with_defaults() -> Self {
        Self {
            categories: vec![
                Category::with_id("home", "Home", CategoryKind::Expense),
                Category::with_id("groceries", "Groceries", CategoryKind::Expense),
                Category::with_id("clothing", "Clothing", CategoryKind::Expense),
                Category::with_id("salary", "Salary", CategoryKind::Income),
            ],
            transactions: Vec::new(),
        }
    }

    pub fn add_category(&mut self, category: Category) -> String {
        let id = category.id.clone();
        self.categories.push(category);
        id
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> String {
        let id = transaction.id.clone();
        self.transactions.push(transaction);
        id
    }

    /// Removes a category without touching its referrers; they become
    /// orphaned and aggregate to nothing.
    pub fn remove_category(&mut self, id: &str) {
        self.categories.retain(|category| category.id != id);
    }

    pub fn remove_transaction(&mut self, id: &str) {
        self.transactions.retain(|transaction| transaction.id != id);
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Expense categories in definition order.
    pub fn expense_categories(&self) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|category| category.kind == CategoryKind::Expense)
            .collect()
    }
}
