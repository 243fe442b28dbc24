//! Billing - monthly cost estimation
//!
//! This module turns a resource inventory into a current/projected cost
//! summary for the running billing month.
//!
//! # Module Structure
//!
//! - `month`: billing period and time-delta helpers
//! - `pricing`: rate tables and rate constants
//! - `estimate`: per-category estimators and the summary aggregator

mod estimate;
mod month;
mod pricing;

#[cfg(test)]
mod tests;

// Re-export public types
pub use estimate::{
    backup_costs, compute_cost_summary, database_costs, droplet_costs, round2, snapshot_costs,
    storage_costs, volume_costs, CostEstimate, CostSummary, MeteredStorage,
};
pub use month::{hours_between, weeks_between, BillingPeriod};
pub use pricing::{
    DatabaseRates, BACKUPS_PER_MONTH, BACKUP_PRICE_RATIO, MAX_BILLABLE_HOURS,
    SNAPSHOT_COST_PER_GB_MONTH, VOLUME_COST_PER_GB_MONTH,
};
