//! Plain data types shared across the planning services.

pub mod category;
pub mod ledger;
pub mod plan;
pub mod row;
pub mod transaction;

pub use category::{Category, CategoryKind};
pub use ledger::{Ledger, LEDGER_STORAGE_KEY};
pub use plan::{MonthKey, PlanSection, PlanSnapshot};
pub use row::{parse_amount, sum_amounts, Row, RowField, WeeklyRow};
pub use transaction::Transaction;
