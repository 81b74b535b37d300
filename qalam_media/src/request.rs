// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search requests.

use crate::{MediaConfig, MediaError};

/// What to search for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Still images.
    #[default]
    Photos,
    /// Short clips.
    Videos,
}

impl MediaKind {
    /// Parses a `type` query parameter. Anything but `"videos"` means photos.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("videos") => Self::Videos,
            _ => Self::Photos,
        }
    }

    /// The parameter spelling of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Photos => "photos",
            Self::Videos => "videos",
        }
    }
}

/// A single provider search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaRequest {
    /// Photos or videos.
    pub kind: MediaKind,
    /// Search terms, non-empty.
    pub query: String,
    /// Results per page.
    pub per_page: u32,
    /// Endpoint URL for this kind, without query string.
    pub endpoint: String,
}

impl MediaRequest {
    /// Builds a request for `query` using `config`'s endpoints.
    ///
    /// Fails with [`MediaError::EmptyQuery`] for a blank query.
    pub fn new(config: &MediaConfig, kind: MediaKind, query: &str) -> Result<Self, MediaError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(MediaError::EmptyQuery);
        }
        let endpoint = match kind {
            MediaKind::Photos => &config.photos_endpoint,
            MediaKind::Videos => &config.videos_endpoint,
        };
        Ok(Self {
            kind,
            query: query.to_owned(),
            per_page: config.per_page,
            endpoint: endpoint.clone(),
        })
    }

    /// Query-string pairs, unencoded. Transports percent-encode them.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("query", self.query.clone()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}
