//! Per-category cost estimators and the summary aggregator
//!
//! All estimators are pure: given a resource list and a fixed
//! [`BillingPeriod`] they produce a current/projected cost pair. Each
//! resource's contribution is rounded to cents before it is added, and
//! subtotals are sums of those already-rounded amounts; keeping that order
//! keeps displayed totals identical to what the command has always shown.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use tracing::debug;

use crate::error::{Error, Result};
use crate::resources::{DatabaseCluster, Droplet, ResourceInventory, Snapshot, Volume};

use super::month::{hours_between, BillingPeriod};
use super::pricing::{
    DatabaseRates, BACKUPS_PER_MONTH, BACKUP_PRICE_RATIO, MAX_BILLABLE_HOURS,
    SNAPSHOT_COST_PER_GB_MONTH, VOLUME_COST_PER_GB_MONTH,
};

/// Round a dollar amount to cents
#[must_use]
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// A current/projected cost pair in USD
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    /// Cost accrued so far this month
    pub current: f64,
    /// Estimated cost for the full billing month
    pub projected: f64,
}

impl CostEstimate {
    /// The zero estimate
    pub const ZERO: Self = Self {
        current: 0.0,
        projected: 0.0,
    };

    /// Create an estimate from a current/projected pair
    #[must_use]
    pub const fn new(current: f64, projected: f64) -> Self {
        Self { current, projected }
    }
}

impl Add for CostEstimate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            current: self.current + rhs.current,
            projected: self.projected + rhs.projected,
        }
    }
}

impl AddAssign for CostEstimate {
    fn add_assign(&mut self, rhs: Self) {
        self.current += rhs.current;
        self.projected += rhs.projected;
    }
}

impl Sum for CostEstimate {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Hours a resource bills for, split into accrued and full-month shares
#[derive(Debug, Clone, Copy)]
struct ProratedHours {
    run: f64,
    projected: f64,
}

/// Prorate a resource's hours within the billing month.
///
/// Resources created before the month bill from the month boundary and
/// project a full capped month; resources created mid-month bill from
/// creation and project only the hours left until the month rolls over.
fn prorate(period: &BillingPeriod, created_at: DateTime<Utc>) -> ProratedHours {
    let (run, projected) = if period.started_this_month(created_at) {
        (
            period.hours_since(created_at),
            hours_between(period.next_month_start(), created_at).min(MAX_BILLABLE_HOURS),
        )
    } else {
        (period.hours_since(period.month_start()), MAX_BILLABLE_HOURS)
    };

    ProratedHours {
        run: run.min(MAX_BILLABLE_HOURS),
        projected,
    }
}

/// Accumulate one hourly-billed resource into a running estimate
fn accrue_hourly(
    total: &mut CostEstimate,
    period: &BillingPeriod,
    created_at: DateTime<Utc>,
    hourly_rate: f64,
) {
    let hours = prorate(period, created_at);
    total.current += round2(hours.run * hourly_rate);
    total.projected += round2(hours.projected * hourly_rate);
}

/// Current and projected cost of all droplets
#[must_use]
pub fn droplet_costs(droplets: &[Droplet], period: &BillingPeriod) -> CostEstimate {
    let mut total = CostEstimate::ZERO;
    for droplet in droplets {
        accrue_hourly(
            &mut total,
            period,
            droplet.created_at,
            droplet.size.price_hourly,
        );
    }
    total
}

/// Current and projected cost of all managed database clusters.
///
/// Rates come from the injected table; a size/node-count combination with
/// no published rate fails the whole estimate rather than guessing a price.
pub fn database_costs(
    databases: &[DatabaseCluster],
    rates: &DatabaseRates,
    period: &BillingPeriod,
) -> Result<CostEstimate> {
    let mut total = CostEstimate::ZERO;
    for database in databases {
        let hourly = rates
            .hourly_rate(&database.size, database.num_nodes)
            .ok_or_else(|| Error::UnknownDatabaseRate {
                size: database.size.clone(),
                num_nodes: database.num_nodes,
            })?;
        accrue_hourly(&mut total, period, database.created_at, hourly);
    }
    Ok(total)
}

/// Storage billed by provisioned size.
///
/// Seam shared by volumes and snapshots; both prorate identically and
/// differ only in the per-GB monthly rate.
pub trait MeteredStorage {
    /// When the storage was created
    fn created_at(&self) -> DateTime<Utc>;

    /// Size in gigabytes
    fn size_gigabytes(&self) -> f64;
}

impl MeteredStorage for Volume {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn size_gigabytes(&self) -> f64 {
        self.size_gigabytes as f64
    }
}

impl MeteredStorage for Snapshot {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn size_gigabytes(&self) -> f64 {
        self.size_gigabytes
    }
}

/// Current and projected cost of size-billed storage at a per-GB monthly
/// rate, spread over the capped month
#[must_use]
pub fn storage_costs<S: MeteredStorage>(
    items: &[S],
    monthly_rate_per_gb: f64,
    period: &BillingPeriod,
) -> CostEstimate {
    let mut total = CostEstimate::ZERO;
    for item in items {
        let hourly = item.size_gigabytes() * monthly_rate_per_gb / MAX_BILLABLE_HOURS;
        accrue_hourly(&mut total, period, item.created_at(), hourly);
    }
    total
}

/// Current and projected cost of all block-storage volumes
#[must_use]
pub fn volume_costs(volumes: &[Volume], period: &BillingPeriod) -> CostEstimate {
    storage_costs(volumes, VOLUME_COST_PER_GB_MONTH, period)
}

/// Current and projected cost of all snapshots
#[must_use]
pub fn snapshot_costs(snapshots: &[Snapshot], period: &BillingPeriod) -> CostEstimate {
    storage_costs(snapshots, SNAPSHOT_COST_PER_GB_MONTH, period)
}

/// Current and projected cost of weekly droplet backups.
///
/// Only droplets with the backups feature contribute. One backup costs 5%
/// of a full compute month and up to four are taken per month; the weekly
/// cadence is anchored at creation (or month start for older droplets),
/// which approximates the provider's real backup schedule.
#[must_use]
pub fn backup_costs(droplets: &[Droplet], period: &BillingPeriod) -> CostEstimate {
    let mut total = CostEstimate::ZERO;
    for droplet in droplets.iter().filter(|d| d.backups_enabled()) {
        let unit = droplet.size.price_hourly * MAX_BILLABLE_HOURS * BACKUP_PRICE_RATIO;
        let since = if period.started_this_month(droplet.created_at) {
            droplet.created_at
        } else {
            period.month_start()
        };
        let taken = period.weeks_since(since).min(BACKUPS_PER_MONTH);

        total.current += round2(taken * unit);
        total.projected += round2(BACKUPS_PER_MONTH * unit);
    }
    total
}

/// Per-category subtotals of one cost summary
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CostSummary {
    /// Droplet compute cost
    pub droplets: CostEstimate,
    /// Managed database cost
    pub databases: CostEstimate,
    /// Block-storage volume cost
    pub volumes: CostEstimate,
    /// Snapshot cost
    pub snapshots: CostEstimate,
    /// Weekly droplet backup cost
    pub backups: CostEstimate,
}

impl CostSummary {
    /// Grand total across all categories.
    ///
    /// Subtotals are already sums of per-resource cent-rounded amounts; the
    /// total adds them as-is and leaves any re-rounding to the presenter.
    #[must_use]
    pub fn total(&self) -> CostEstimate {
        self.droplets + self.databases + self.volumes + self.snapshots + self.backups
    }
}

/// Compute the full cost summary for an account's inventory.
///
/// Fails without partial results if any database rate is unknown; a summary
/// that silently dropped a cluster would misstate the bill.
pub fn compute_cost_summary(
    inventory: &ResourceInventory,
    rates: &DatabaseRates,
    period: &BillingPeriod,
) -> Result<CostSummary> {
    let summary = CostSummary {
        droplets: droplet_costs(&inventory.droplets, period),
        databases: database_costs(&inventory.databases, rates, period)?,
        volumes: volume_costs(&inventory.volumes, period),
        snapshots: snapshot_costs(&inventory.snapshots, period),
        backups: backup_costs(&inventory.droplets, period),
    };

    let total = summary.total();
    debug!(
        resources = inventory.len(),
        current = total.current,
        projected = total.projected,
        "Computed cost summary"
    );

    Ok(summary)
}
