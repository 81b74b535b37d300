// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Environment variable holding the stock media API key.
pub const API_KEY_VAR: &str = "PEXELS_API_KEY";

/// Media provider settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaConfig {
    /// Provider API key. `None` means media lookup is not set up.
    pub api_key: Option<String>,
    /// Results requested per search. Only the first result is used.
    pub per_page: u32,
    /// Photo search endpoint.
    pub photos_endpoint: String,
    /// Video search endpoint.
    pub videos_endpoint: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            per_page: 1,
            photos_endpoint: "https://api.pexels.com/v1/search".to_owned(),
            videos_endpoint: "https://api.pexels.com/videos/search".to_owned(),
        }
    }
}

impl MediaConfig {
    /// Default settings with the key taken from [`API_KEY_VAR`].
    ///
    /// An unset or blank variable leaves the key unset.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self {
            api_key,
            ..Self::default()
        }
    }

    /// Default settings with an explicit key.
    #[must_use]
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// The configured key, if any.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}
