//! Rate tables for DigitalOcean resources
//!
//! The API does not expose hourly rates for managed databases, so they live
//! here as configuration data and must track the provider's published
//! pricing. Storage and backup rates are product-wide constants.

use std::collections::HashMap;

// ============================================================================
// Constants
// ============================================================================

/// Maximum billable hours in a month (28 days x 24 hours)
pub const MAX_BILLABLE_HOURS: f64 = 672.0;

/// Monthly price per gigabyte for block-storage volumes (USD)
pub const VOLUME_COST_PER_GB_MONTH: f64 = 0.10;

/// Monthly price per gigabyte for snapshots (USD)
pub const SNAPSHOT_COST_PER_GB_MONTH: f64 = 0.05;

/// One backup costs this fraction of a full compute month
pub const BACKUP_PRICE_RATIO: f64 = 0.05;

/// Backups are taken weekly, up to this many per month
pub const BACKUPS_PER_MONTH: f64 = 4.0;

// ============================================================================
// Database Rates
// ============================================================================

/// Hourly rates for managed database clusters, keyed by size slug and
/// node count.
///
/// Injectable so the table can be updated or mocked without touching the
/// estimator algorithm. A missing entry is a hard error at estimation time;
/// substituting a default price would misstate the bill.
#[derive(Debug, Clone)]
pub struct DatabaseRates {
    rates: HashMap<(String, u32), f64>,
}

impl DatabaseRates {
    /// Create an empty table
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Set the hourly rate for a size/node-count combination
    pub fn insert(&mut self, size: impl Into<String>, num_nodes: u32, hourly: f64) {
        self.rates.insert((size.into(), num_nodes), hourly);
    }

    /// Hourly rate for a size/node-count combination, if published
    #[must_use]
    pub fn hourly_rate(&self, size: &str, num_nodes: u32) -> Option<f64> {
        self.rates.get(&(size.to_string(), num_nodes)).copied()
    }

    /// Number of published rates
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the table has no rates at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for DatabaseRates {
    /// DigitalOcean's published managed-database pricing
    fn default() -> Self {
        let mut table = Self::empty();

        table.insert("db-s-1vcpu-1gb", 1, 0.022);

        table.insert("db-s-1vcpu-2gb", 1, 0.045);
        table.insert("db-s-1vcpu-2gb", 2, 0.074);
        table.insert("db-s-1vcpu-2gb", 3, 0.104);

        table.insert("db-s-2vcpu-4gb", 1, 0.089);
        table.insert("db-s-2vcpu-4gb", 2, 0.149);
        table.insert("db-s-2vcpu-4gb", 3, 0.208);

        table.insert("db-s-4vcpu-8gb", 1, 0.179);
        table.insert("db-s-4vcpu-8gb", 2, 0.298);
        table.insert("db-s-4vcpu-8gb", 3, 0.417);

        table.insert("db-s-6vcpu-16gb", 1, 0.357);
        table.insert("db-s-6vcpu-16gb", 2, 0.595);
        table.insert("db-s-6vcpu-16gb", 3, 0.833);

        table.insert("db-s-8vcpu-32gb", 1, 0.714);
        table.insert("db-s-8vcpu-32gb", 2, 1.19);
        table.insert("db-s-8vcpu-32gb", 3, 1.667);

        // The largest size is not offered as a three-node cluster
        table.insert("db-s-16vcpu-64gb", 1, 2.381);
        table.insert("db-s-16vcpu-64gb", 2, 3.333);

        table
    }
}
