//! Pure aggregation helpers over raw ledger transactions.

use chrono::{Datelike, NaiveDate};

use crate::domain::category::CategoryKind;
use crate::domain::plan::MonthKey;
use crate::domain::transaction::Transaction;

/// Stateless sums and filters over transaction slices.
pub struct AggregationService;

impl AggregationService {
    /// Sums the amounts of transactions matching the predicate; no match
    /// sums to zero.
    pub fn sum<F>(transactions: &[Transaction], predicate: F) -> f64
    where
        F: Fn(&Transaction) -> bool,
    {
        transactions
            .iter()
            .filter(|transaction| predicate(transaction))
            .map(|transaction| transaction.amount)
            .sum()
    }

    /// Sums every transaction of the given kind across the whole ledger.
    pub fn kind_total(transactions: &[Transaction], kind: CategoryKind) -> f64 {
        Self::sum(transactions, |transaction| transaction.kind == kind)
    }

    /// Transactions dated within the given calendar month.
    pub fn month_filter(transactions: &[Transaction], month: MonthKey) -> Vec<&Transaction> {
        transactions
            .iter()
            .filter(|transaction| month.contains(transaction.date.date_naive()))
            .collect()
    }

    /// Transactions dated within the inclusive date range.
    pub fn range_filter<'a>(
        transactions: &'a [Transaction],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|transaction| {
                let date = transaction.date.date_naive();
                date >= start && date <= end
            })
            .collect()
    }

    /// Monthly expense spend for one category, bucketed into four fixed week
    /// ranges: days 1-7, 8-14, 15-21, and everything from day 22 onwards.
    ///
    /// Always four buckets regardless of month length; 29-31 day tails fold
    /// into the last bucket.
    pub fn weekly_buckets(
        transactions: &[Transaction],
        category_id: &str,
        month: MonthKey,
    ) -> [f64; 4] {
        let mut buckets = [0.0; 4];
        for transaction in transactions {
            if transaction.kind != CategoryKind::Expense || transaction.category_id != category_id
            {
                continue;
            }
            let date = transaction.date.date_naive();
            if !month.contains(date) {
                continue;
            }
            let bucket = (((date.day() - 1) / 7) as usize).min(3);
            buckets[bucket] += transaction.amount;
        }
        buckets
    }

    /// Income sum minus expense sum for transactions in the month.
    pub fn net_income_for_month(transactions: &[Transaction], month: MonthKey) -> f64 {
        Self::month_filter(transactions, month)
            .iter()
            .map(|transaction| transaction.signed_amount())
            .sum()
    }
}
