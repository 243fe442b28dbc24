//! The cost-summary chat command
//!
//! One invocation gates on the API token, fetches the four resource
//! categories, estimates and renders. Any failure past the secret gate
//! becomes a single displayable error reply; there is no partial summary.

use dobill_api::{DigitalOceanClient, ResourceFetcher};
use dobill_core::billing::{compute_cost_summary, BillingPeriod, DatabaseRates};
use tracing::{debug, info};
use url::Url;

use crate::error::Result;
use crate::report::render_summary;
use crate::response::CommandResponse;
use crate::secrets::SecretProvider;

/// Secret the DigitalOcean API token is read from
pub const API_KEY_SECRET: &str = "DIGITALOCEAN_API_KEY";

/// The cost-summary chat command
pub struct BillCommand<S> {
    secrets: S,
    rates: DatabaseRates,
    api_base: Option<Url>,
}

impl<S: SecretProvider> BillCommand<S> {
    /// Create the command with default rates and API endpoint
    #[must_use]
    pub fn new(secrets: S) -> Self {
        Self {
            secrets,
            rates: DatabaseRates::default(),
            api_base: None,
        }
    }

    /// Override the API endpoint (tests, proxies)
    #[must_use]
    pub fn with_api_base(mut self, api_base: Url) -> Self {
        self.api_base = Some(api_base);
        self
    }

    /// Override the database rate table
    #[must_use]
    pub fn with_rates(mut self, rates: DatabaseRates) -> Self {
        self.rates = rates;
        self
    }

    /// Handle one command invocation and produce the chat reply
    pub async fn execute(&self) -> CommandResponse {
        let Some(token) = self.secrets.get_secret(API_KEY_SECRET) else {
            debug!(secret = API_KEY_SECRET, "API token missing, skipping fetch");
            return CommandResponse::ephemeral(missing_key_text());
        };

        let mut client = DigitalOceanClient::new(token);
        if let Some(base) = &self.api_base {
            client = client.with_base_url(base.clone());
        }

        match self.summarize(&client).await {
            Ok(text) => CommandResponse::in_channel(text),
            Err(err) => CommandResponse::error(err),
        }
    }

    /// Fetch, estimate and render against the current billing month
    pub async fn summarize(&self, fetcher: &dyn ResourceFetcher) -> Result<String> {
        self.summarize_at(fetcher, &BillingPeriod::current()).await
    }

    /// Fetch, estimate and render against a fixed billing period
    pub async fn summarize_at(
        &self,
        fetcher: &dyn ResourceFetcher,
        period: &BillingPeriod,
    ) -> Result<String> {
        let inventory = fetcher.fetch_inventory().await?;
        info!(resources = inventory.len(), "Fetched resource inventory");

        let summary = compute_cost_summary(&inventory, &self.rates, period)?;
        Ok(render_summary(&summary))
    }
}

fn missing_key_text() -> String {
    format!(
        "You need the `{API_KEY_SECRET}` secret to run this command. \
         Create a personal access token in the DigitalOcean control panel \
         (API > Tokens) and export it as `{API_KEY_SECRET}`."
    )
}
