// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Failure reported by a [`MediaTransport`](crate::MediaTransport).
#[derive(Debug, Error)]
#[error("media transport failed: {message}")]
pub struct TransportError {
    /// Human-readable cause, for logs.
    pub message: String,
}

impl TransportError {
    /// Creates an error with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors from a media search.
#[derive(Debug, Error)]
pub enum MediaError {
    /// No API key is configured; media lookup needs to be set up.
    #[error("missing API key; set {} in the environment", crate::API_KEY_VAR)]
    MissingCredential,
    /// The query was empty.
    #[error("query parameter is required")]
    EmptyQuery,
    /// The provider answered with a non-success status.
    #[error("provider returned {status}: {message}")]
    Provider {
        /// HTTP status code.
        status: u16,
        /// Provider message, or a generic description.
        message: String,
    },
    /// The request never completed.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The provider's body was not the expected JSON.
    #[error("undecodable provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl MediaError {
    /// Returns true if this error means the feature is not set up, as
    /// opposed to a search that simply failed.
    #[must_use]
    pub const fn is_setup_required(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }
}
