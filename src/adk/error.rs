// SPDX-License-Identifier: MIT

//! Typed errors for model invocations
//!
//! Every provider maps its transport and API failures into [`ModelError`] so
//! callers can tell a transient failure (worth retrying upstream) from a
//! permanent one.

use thiserror::Error;

/// Errors raised while invoking a language model
#[derive(Debug, Error)]
pub enum ModelError {
    /// API key not configured
    #[error("API key not configured for provider: {0}")]
    ApiKeyMissing(String),

    /// Provider name not recognised
    #[error("Unsupported model provider: {0}")]
    UnsupportedProvider(String),

    /// Non-success response from the provider
    #[error("API error from {provider} (status {status}): {message}")]
    Api {
        provider: String,
        status: u16,
        message: String,
    },

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    /// Response body did not have the expected shape
    #[error("Invalid response from model: {0}")]
    InvalidResponse(String),

    /// Transport-level failure
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ModelError {
    /// Create an API error
    pub fn api(provider: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            provider: provider.into(),
            status,
            message: message.into(),
        }
    }

    /// Create an invalid response error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Whether the same request could succeed if sent again later
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RateLimited { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            Self::Http(err) => err.is_timeout() || err.is_connect(),
            Self::ApiKeyMissing(_) | Self::UnsupportedProvider(_) | Self::InvalidResponse(_) => {
                false
            }
        }
    }

    /// Map a non-success HTTP status into the matching error
    pub(crate) fn from_status(
        provider: &str,
        status: reqwest::StatusCode,
        retry_after_secs: Option<u64>,
        body: String,
    ) -> Self {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            Self::RateLimited { retry_after_secs }
        } else {
            Self::api(provider, status.as_u16(), body)
        }
    }
}
