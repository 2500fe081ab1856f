use chrono::{TimeZone, Utc};
use planner_core::core::services::{
    reconcile_percents, AllocationService, RollupService,
};
use planner_core::domain::{CategoryKind, MonthKey, PlanSnapshot, Row, Transaction};

fn transactions() -> Vec<Transaction> {
    let date = Utc.with_ymd_and_hms(2025, 5, 3, 14, 0, 0).unwrap();
    vec![
        Transaction::new(CategoryKind::Income, 1000.0, "salary", date),
        Transaction::new(CategoryKind::Expense, 200.0, "home", date),
    ]
}

#[test]
fn autofill_matches_the_worked_example() {
    // income 1000, expenses 200, debt 100, overspend 50, percent 20 => 130.00
    let mut snapshot = PlanSnapshot::default();
    snapshot.debts.push(Row::with_parts("d", "Loan", "100"));
    snapshot.prev_over = "50".into();
    snapshot.predicted.push(Row::with_parts("groceries", "Groceries", ""));
    AllocationService::set_percent(&mut snapshot, "groceries", 20.0);

    AllocationService::autofill(&mut snapshot, &transactions());
    assert_eq!(snapshot.predicted[0].amount, "130.00");
}

#[test]
fn autofill_overwrites_prior_predictions() {
    let mut snapshot = PlanSnapshot::default();
    snapshot.predicted.push(Row::with_parts("groceries", "Groceries", "999"));
    AllocationService::set_percent(&mut snapshot, "groceries", 10.0);

    AllocationService::autofill(&mut snapshot, &transactions());
    // available is 800; 10% of it replaces the stale 999
    assert_eq!(snapshot.predicted[0].amount, "80.00");
}

#[test]
fn autofill_feeds_straight_into_the_rollup() {
    let mut snapshot = PlanSnapshot::default();
    snapshot.net_income = "800".into();
    snapshot.predicted.push(Row::with_parts("groceries", "Groceries", ""));
    snapshot.predicted.push(Row::with_parts("home", "Home", ""));
    AllocationService::set_percent(&mut snapshot, "groceries", 25.0);
    AllocationService::set_percent(&mut snapshot, "home", 25.0);

    AllocationService::autofill(&mut snapshot, &transactions());
    let report = RollupService::report(&snapshot, &[], MonthKey::new(2025, 4));
    assert_eq!(report.totals.predicted_total, 400.0);
    assert_eq!(report.totals.remaining, 800.0 - 400.0);
}

#[test]
fn percents_follow_the_category_set() {
    let mut snapshot = PlanSnapshot::default();
    AllocationService::set_percent(&mut snapshot, "groceries", 20.0);
    AllocationService::set_percent(&mut snapshot, "gone", 55.0);

    let live_ids = vec!["groceries".to_string(), "clothing".to_string()];
    snapshot.percents = reconcile_percents(&snapshot.percents, &live_ids);

    assert_eq!(snapshot.percent_for("groceries"), 20.0);
    assert_eq!(snapshot.percent_for("clothing"), 0.0);
    assert_eq!(snapshot.percent_for("gone"), 0.0);
}

#[test]
fn rounding_stays_at_two_decimals() {
    let mut snapshot = PlanSnapshot::default();
    snapshot.predicted.push(Row::with_parts("groceries", "Groceries", ""));
    AllocationService::set_percent(&mut snapshot, "groceries", 33.0);

    // available = 1000 - 200 = 800; 33% = 264.00
    AllocationService::autofill(&mut snapshot, &transactions());
    assert_eq!(snapshot.predicted[0].amount, "264.00");

    let date = Utc.with_ymd_and_hms(2025, 5, 3, 14, 0, 0).unwrap();
    let odd = vec![Transaction::new(CategoryKind::Income, 100.55, "salary", date)];
    AllocationService::set_percent(&mut snapshot, "groceries", 33.0);
    AllocationService::autofill(&mut snapshot, &odd);
    assert_eq!(snapshot.predicted[0].amount, "33.18");
}
