//! Dobill Core - DigitalOcean Cost Estimation
//!
//! This crate provides the cost computation behind the dobill chat command:
//! - Resources: droplet, database cluster, volume and snapshot records
//! - Billing: billing period math, rate tables, per-category estimators
//! - Error: estimation error type
//!
//! Everything here is pure computation over externally supplied records.
//! Fetching lives in `dobill-api` and presentation in `dobill-command`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod billing;
pub mod error;
pub mod resources;

pub use billing::{
    compute_cost_summary, BillingPeriod, CostEstimate, CostSummary, DatabaseRates,
    MAX_BILLABLE_HOURS,
};
pub use error::{Error, Result};
pub use resources::{DatabaseCluster, Droplet, DropletSize, ResourceInventory, Snapshot, Volume};
