//! Resource fetcher capability
//!
//! The command handler depends on this seam rather than on the concrete
//! client, so tests can substitute canned inventories.

use async_trait::async_trait;
use dobill_core::resources::ResourceInventory;

use crate::client::DigitalOceanClient;
use crate::error::Result;

/// Capability to fetch an account's billable resource inventory
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetch all four resource categories
    async fn fetch_inventory(&self) -> Result<ResourceInventory>;
}

#[async_trait]
impl ResourceFetcher for DigitalOceanClient {
    async fn fetch_inventory(&self) -> Result<ResourceInventory> {
        DigitalOceanClient::fetch_inventory(self).await
    }
}
