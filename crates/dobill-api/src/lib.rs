//! Dobill API - DigitalOcean REST client
//!
//! Thin client over the provider's v2 API covering the four list endpoints
//! the cost summary needs:
//! - Client: authenticated, paginated listing of droplets, databases,
//!   volumes and snapshots
//! - Fetcher: the capability trait the command handler depends on
//! - Error: transport, status and decode errors

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod fetcher;

pub use client::{DigitalOceanClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use fetcher::ResourceFetcher;
