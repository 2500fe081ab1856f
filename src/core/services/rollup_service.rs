//! Derived monetary layers: liquid, recurring, bills, predicted, remaining.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::services::AggregationService;
use crate::domain::plan::{MonthKey, PlanSnapshot};
use crate::domain::row::sum_amounts;
use crate::domain::transaction::Transaction;

/// How actual spend compares to the planned amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProgressStatus {
    UnderBudget,
    OnTrack,
    OverBudget,
    Empty,
}

/// Planned-versus-spent figures for one predicted category row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryProgress {
    pub category_id: String,
    pub name: String,
    pub planned: f64,
    pub spent: f64,
    pub weekly: [f64; 4],
    pub remaining: f64,
    pub variance: f64,
    pub percent_over: f64,
    pub status: ProgressStatus,
}

impl CategoryProgress {
    /// Builds the derived fields from the planned amount and bucketed spend.
    ///
    /// Negative `variance`/`percent_over` means at or under budget
    /// (favorable); positive means overspent.
    pub fn from_parts(category_id: String, name: String, planned: f64, weekly: [f64; 4]) -> Self {
        let spent: f64 = weekly.iter().sum();
        let remaining = planned - spent;
        let variance = spent - planned;
        let percent_over = if planned > 0.0 {
            (spent / planned - 1.0) * 100.0
        } else {
            0.0
        };
        let status = if planned.abs() < f64::EPSILON && spent.abs() < f64::EPSILON {
            ProgressStatus::Empty
        } else {
            match spent.partial_cmp(&planned).unwrap_or(Ordering::Equal) {
                Ordering::Greater => ProgressStatus::OverBudget,
                Ordering::Less => ProgressStatus::UnderBudget,
                Ordering::Equal => ProgressStatus::OnTrack,
            }
        };
        Self {
            category_id,
            name,
            planned,
            spent,
            weekly,
            remaining,
            variance,
            percent_over,
            status,
        }
    }

    /// Favorable means at or under the planned amount.
    pub fn is_favorable(&self) -> bool {
        self.variance <= 0.0
    }
}

/// Layered monetary totals derived from one snapshot plus ledger activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanTotals {
    pub net_income: f64,
    pub debt_total: f64,
    pub saving_total: f64,
    pub liquid_total: f64,
    pub recurring_total: f64,
    pub bills_total: f64,
    pub predicted_total: f64,
    pub remaining: f64,
    pub week_totals: [f64; 4],
}

/// Full rollup of one month: totals plus per-category progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanReport {
    pub month: MonthKey,
    pub totals: PlanTotals,
    pub per_category: Vec<CategoryProgress>,
}

/// Stateless rollup calculations over plan snapshots.
pub struct RollupService;

impl RollupService {
    /// Derives every total layer for the snapshot's month.
    ///
    /// Net income is the user-entered figure when present, otherwise the
    /// ledger-derived monthly net.
    pub fn report(
        snapshot: &PlanSnapshot,
        transactions: &[Transaction],
        month: MonthKey,
    ) -> PlanReport {
        let net_income = snapshot
            .entered_net_income()
            .unwrap_or_else(|| AggregationService::net_income_for_month(transactions, month));
        let debt_total = sum_amounts(&snapshot.debts);
        let saving_total = sum_amounts(&snapshot.savings);
        let liquid_total = net_income - debt_total - saving_total - snapshot.prev_over_value();
        let recurring_total = sum_amounts(&snapshot.reg_debts)
            + sum_amounts(&snapshot.reg_savings)
            + sum_amounts(&snapshot.reg_other);
        let bills_total = liquid_total - recurring_total;
        let predicted_total = sum_amounts(&snapshot.predicted) + sum_amounts(&snapshot.cash);
        let remaining = bills_total - predicted_total;

        let mut week_totals = [0.0f64; 4];
        let mut per_category = Vec::with_capacity(snapshot.predicted.len());
        for row in &snapshot.predicted {
            let weekly = AggregationService::weekly_buckets(transactions, &row.id, month);
            for (total, bucket) in week_totals.iter_mut().zip(weekly.iter()) {
                *total += *bucket;
            }
            per_category.push(CategoryProgress::from_parts(
                row.id.clone(),
                row.name.clone(),
                row.amount_value(),
                weekly,
            ));
        }

        PlanReport {
            month,
            totals: PlanTotals {
                net_income,
                debt_total,
                saving_total,
                liquid_total,
                recurring_total,
                bills_total,
                predicted_total,
                remaining,
                week_totals,
            },
            per_category,
        }
    }
}
