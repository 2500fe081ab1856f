//! Percentage-of-available-funds autofill for predicted rows.

use crate::core::services::AggregationService;
use crate::domain::category::CategoryKind;
use crate::domain::plan::PlanSnapshot;
use crate::domain::row::sum_amounts;
use crate::domain::transaction::Transaction;

/// One-shot recompute of predicted amounts from user-set percentages.
pub struct AllocationService;

impl AllocationService {
    /// Overwrites every predicted amount with its share of the available
    /// funds. Idempotent for unchanged inputs; prior predicted values are
    /// not consulted.
    ///
    /// Percentages are independent and may sum to anything; over- or
    /// under-allocation surfaces transparently in the rollup's remaining
    /// figure.
    pub fn autofill(snapshot: &mut PlanSnapshot, transactions: &[Transaction]) {
        let available = Self::available_funds(snapshot, transactions);
        for row in &mut snapshot.predicted {
            let percent = snapshot.percents.get(&row.id).copied().unwrap_or(0.0);
            row.amount = format!("{:.2}", round2(available * percent / 100.0));
        }
    }

    /// Whole-ledger net funds minus debts and the prior month's overspend.
    pub fn available_funds(snapshot: &PlanSnapshot, transactions: &[Transaction]) -> f64 {
        let income = AggregationService::kind_total(transactions, CategoryKind::Income);
        let expenses = AggregationService::kind_total(transactions, CategoryKind::Expense);
        income - expenses - sum_amounts(&snapshot.debts) - snapshot.prev_over_value()
    }

    /// Records the autofill percentage for one predicted row.
    pub fn set_percent(snapshot: &mut PlanSnapshot, id: &str, percent: f64) {
        snapshot.percents.insert(id.to_string(), percent);
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::row::Row;
    use chrono::{TimeZone, Utc};

    fn sample_transactions() -> Vec<Transaction> {
        let date = Utc.with_ymd_and_hms(2025, 5, 5, 12, 0, 0).unwrap();
        vec![
            Transaction::new(CategoryKind::Income, 1000.0, "salary", date),
            Transaction::new(CategoryKind::Expense, 200.0, "home", date),
        ]
    }

    fn sample_snapshot() -> PlanSnapshot {
        let mut snapshot = PlanSnapshot::default();
        snapshot.debts.push(Row::with_parts("d1", "Loan", "100"));
        snapshot.prev_over = "50".into();
        snapshot
            .predicted
            .push(Row::with_parts("groceries", "Groceries", ""));
        AllocationService::set_percent(&mut snapshot, "groceries", 20.0);
        snapshot
    }

    #[test]
    fn autofill_is_deterministic() {
        let mut snapshot = sample_snapshot();
        let transactions = sample_transactions();
        assert_eq!(
            AllocationService::available_funds(&snapshot, &transactions),
            650.0
        );
        AllocationService::autofill(&mut snapshot, &transactions);
        assert_eq!(snapshot.predicted[0].amount, "130.00");
    }

    #[test]
    fn autofill_is_idempotent() {
        let mut snapshot = sample_snapshot();
        let transactions = sample_transactions();
        AllocationService::autofill(&mut snapshot, &transactions);
        let first = snapshot.clone();
        AllocationService::autofill(&mut snapshot, &transactions);
        assert_eq!(snapshot, first);
    }

    #[test]
    fn rows_without_a_percent_get_zero() {
        let mut snapshot = sample_snapshot();
        snapshot.predicted.push(Row::with_parts("clothing", "Clothing", "99"));
        AllocationService::autofill(&mut snapshot, &sample_transactions());
        assert_eq!(snapshot.predicted[1].amount, "0.00");
    }

    #[test]
    fn percent_sums_are_unconstrained() {
        let mut snapshot = sample_snapshot();
        snapshot.predicted.push(Row::with_parts("home", "Home", ""));
        AllocationService::set_percent(&mut snapshot, "home", 100.0);
        AllocationService::autofill(&mut snapshot, &sample_transactions());
        // 120% allocated in total; both rows fill independently
        assert_eq!(snapshot.predicted[0].amount, "130.00");
        assert_eq!(snapshot.predicted[1].amount, "650.00");
    }
}
