//! Stateless services that operate over domain state passed in by the caller.

pub mod aggregation_service;
pub mod allocation_service;
pub mod ledger_service;
pub mod plan_service;
pub mod rollup_service;

pub use aggregation_service::AggregationService;
pub use allocation_service::AllocationService;
pub use ledger_service::LedgerService;
pub use plan_service::{reconcile_percents, reconcile_predicted, reconcile_weekly, PlanService};
pub use rollup_service::{CategoryProgress, PlanReport, PlanTotals, ProgressStatus, RollupService};
