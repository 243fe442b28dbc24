//! Dobill Command - chat command surface
//!
//! This crate turns one slash-command invocation into a chat reply:
//! - Command: the handler (secret gate, fetch, estimate, render)
//! - Report: Markdown rendering of the cost summary
//! - Response: slash-command reply envelope
//! - Secrets: secret lookup capability
//! - Error: the failures a reply can surface

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod report;
pub mod response;
pub mod secrets;

pub use command::{BillCommand, API_KEY_SECRET};
pub use error::{Error, Result};
pub use report::render_summary;
pub use response::{CommandResponse, ResponseType};
pub use secrets::{EnvSecrets, SecretProvider, StaticSecrets};
