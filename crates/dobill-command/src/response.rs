//! Slash-command response envelope

use serde::{Deserialize, Serialize};

/// Where the chat platform shows a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Visible to the whole channel
    InChannel,
    /// Visible only to the invoking user
    Ephemeral,
}

/// A formatted reply to the chat channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    /// Reply visibility
    pub response_type: ResponseType,
    /// Markdown message body
    pub text: String,
}

impl CommandResponse {
    /// Reply visible to the whole channel
    #[must_use]
    pub fn in_channel(text: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::InChannel,
            text: text.into(),
        }
    }

    /// Reply visible only to the invoking user
    #[must_use]
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::Ephemeral,
            text: text.into(),
        }
    }

    /// Failure reply, formatted the way the channel renders errors
    #[must_use]
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self::in_channel(format!("*ERROR:* {message}"))
    }
}
