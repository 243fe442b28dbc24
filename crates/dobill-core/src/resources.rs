//! Resource records returned by the DigitalOcean API
//!
//! Read-only views over the provider's JSON. The estimators never mutate
//! them; only the fields that determine billing (plus names for display)
//! are deserialized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Feature flag the API sets on droplets with weekly backups enabled
pub const BACKUPS_FEATURE: &str = "backups";

/// A compute instance (droplet)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Droplet {
    /// Droplet ID
    pub id: u64,
    /// Droplet name
    pub name: String,
    /// When the droplet was created
    pub created_at: DateTime<Utc>,
    /// Enabled feature flags (e.g. "backups", "ipv6")
    #[serde(default)]
    pub features: Vec<String>,
    /// Size the droplet runs on
    pub size: DropletSize,
}

impl Droplet {
    /// Whether weekly backups are enabled for this droplet
    #[must_use]
    pub fn backups_enabled(&self) -> bool {
        self.features.iter().any(|f| f == BACKUPS_FEATURE)
    }
}

/// Billing-relevant slice of a droplet size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropletSize {
    /// Size slug (e.g. "s-1vcpu-1gb")
    pub slug: String,
    /// Hourly price in USD
    pub price_hourly: f64,
    /// Monthly price in USD
    pub price_monthly: f64,
}

/// A managed database cluster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseCluster {
    /// Cluster ID
    pub id: String,
    /// Cluster name
    pub name: String,
    /// Database engine (e.g. "pg", "mysql", "redis")
    pub engine: String,
    /// Size slug the rate table is keyed by (e.g. "db-s-1vcpu-1gb")
    pub size: String,
    /// Number of nodes in the cluster
    pub num_nodes: u32,
    /// When the cluster was created
    pub created_at: DateTime<Utc>,
}

/// A block-storage volume
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volume {
    /// Volume ID
    pub id: String,
    /// Volume name
    pub name: String,
    /// Provisioned size in gigabytes
    pub size_gigabytes: u64,
    /// When the volume was created
    pub created_at: DateTime<Utc>,
}

/// A droplet or volume snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot ID
    pub id: String,
    /// Snapshot name
    pub name: String,
    /// Stored size in gigabytes (the API reports fractional sizes)
    pub size_gigabytes: f64,
    /// When the snapshot was taken
    pub created_at: DateTime<Utc>,
}

/// Everything a cost summary is computed from, grouped by category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceInventory {
    /// Droplets on the account
    pub droplets: Vec<Droplet>,
    /// Managed database clusters
    pub databases: Vec<DatabaseCluster>,
    /// Block-storage volumes
    pub volumes: Vec<Volume>,
    /// Snapshots
    pub snapshots: Vec<Snapshot>,
}

impl ResourceInventory {
    /// Total number of resources across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.droplets.len() + self.databases.len() + self.volumes.len() + self.snapshots.len()
    }

    /// Whether the account has no billable resources at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
