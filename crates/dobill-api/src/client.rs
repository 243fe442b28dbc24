//! DigitalOcean REST client
//!
//! Wrapper over the provider's v2 API. Listings paginate; every page is
//! fetched and accumulated before the inventory is handed to the
//! estimators, so a summary never silently covers part of an account.

use dobill_core::resources::{DatabaseCluster, Droplet, ResourceInventory, Snapshot, Volume};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.digitalocean.com/v2";

/// HTTP request timeout in seconds
const HTTP_TIMEOUT_SECS: u64 = 30;

/// Page size for list endpoints
const PER_PAGE: usize = 50;

/// Authenticated client for the DigitalOcean v2 API
pub struct DigitalOceanClient {
    http: reqwest::Client,
    base_url: Url,
    token: SecretString,
}

impl DigitalOceanClient {
    /// Create a client against the default API endpoint
    #[must_use]
    pub fn new(token: SecretString) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid");

        Self {
            http,
            base_url,
            token,
        }
    }

    /// Override the API endpoint (tests, proxies)
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// List all droplets on the account
    pub async fn list_droplets(&self) -> Result<Vec<Droplet>> {
        self.collect_pages("droplets", |envelope: DropletsEnvelope| envelope.droplets)
            .await
    }

    /// List all managed database clusters on the account
    pub async fn list_databases(&self) -> Result<Vec<DatabaseCluster>> {
        self.collect_pages("databases", |envelope: DatabasesEnvelope| {
            envelope.databases
        })
        .await
    }

    /// List all block-storage volumes on the account
    pub async fn list_volumes(&self) -> Result<Vec<Volume>> {
        self.collect_pages("volumes", |envelope: VolumesEnvelope| envelope.volumes)
            .await
    }

    /// List all snapshots on the account
    pub async fn list_snapshots(&self) -> Result<Vec<Snapshot>> {
        self.collect_pages("snapshots", |envelope: SnapshotsEnvelope| {
            envelope.snapshots
        })
        .await
    }

    /// Fetch the four billable categories concurrently
    pub async fn fetch_inventory(&self) -> Result<ResourceInventory> {
        let (droplets, databases, volumes, snapshots) = tokio::try_join!(
            self.list_droplets(),
            self.list_databases(),
            self.list_volumes(),
            self.list_snapshots(),
        )?;

        Ok(ResourceInventory {
            droplets,
            databases,
            volumes,
            snapshots,
        })
    }

    /// Fetch every page of a listing, accumulating the extracted records
    async fn collect_pages<T, E, F>(&self, endpoint: &str, extract: F) -> Result<Vec<T>>
    where
        E: DeserializeOwned,
        F: Fn(E) -> Vec<T>,
    {
        let mut all = Vec::new();
        let mut page = 1;

        loop {
            let envelope: E = self.get_page(endpoint, page).await?;
            let items = extract(envelope);
            let last_page = items.len() < PER_PAGE;
            all.extend(items);

            if last_page {
                break;
            }
            page += 1;
        }

        debug!(endpoint, total = all.len(), pages = page, "Listed resources");
        Ok(all)
    }

    async fn get_page<E: DeserializeOwned>(&self, endpoint: &str, page: usize) -> Result<E> {
        let url = format!(
            "{}/{}?page={}&per_page={}",
            self.base_url.as_str().trim_end_matches('/'),
            endpoint,
            page,
            PER_PAGE
        );
        debug!(%url, "Fetching DigitalOcean resources");

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.token.expose_secret())
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

// The API omits a category's key entirely when the account has none of it,
// so every envelope field defaults to empty.

/// Response envelope for `GET /droplets`
#[derive(Debug, Deserialize)]
struct DropletsEnvelope {
    #[serde(default)]
    droplets: Vec<Droplet>,
}

/// Response envelope for `GET /databases`
#[derive(Debug, Deserialize)]
struct DatabasesEnvelope {
    #[serde(default)]
    databases: Vec<DatabaseCluster>,
}

/// Response envelope for `GET /volumes`
#[derive(Debug, Deserialize)]
struct VolumesEnvelope {
    #[serde(default)]
    volumes: Vec<Volume>,
}

/// Response envelope for `GET /snapshots`
#[derive(Debug, Deserialize)]
struct SnapshotsEnvelope {
    #[serde(default)]
    snapshots: Vec<Snapshot>,
}
