// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Client-side lookup: video first, photo as fallback.

use crate::{MediaConfig, MediaError, MediaKind, MediaRequest, PhotoPage, TransportError, VideoPage};

/// Raw provider reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, expected to be JSON.
    pub body: String,
}

impl TransportResponse {
    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Performs provider requests. Implemented by hosts with their HTTP client.
///
/// Implementations send a GET to [`MediaRequest::endpoint`] with
/// [`MediaRequest::query_pairs`] percent-encoded into the query string and
/// `api_key` as the `Authorization` header.
pub trait MediaTransport {
    /// Sends `request` and returns the provider's reply.
    fn fetch(
        &self,
        request: &MediaRequest,
        api_key: &str,
    ) -> Result<TransportResponse, TransportError>;
}

impl<T: MediaTransport + ?Sized> MediaTransport for &T {
    fn fetch(
        &self,
        request: &MediaRequest,
        api_key: &str,
    ) -> Result<TransportResponse, TransportError> {
        (**self).fetch(request, api_key)
    }
}

/// A playable media URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MediaHit {
    /// A video file URL.
    Video(String),
    /// An image URL.
    Image(String),
}

impl MediaHit {
    /// Convenience constructor for [`MediaHit::Video`].
    pub fn video(url: impl Into<String>) -> Self {
        Self::Video(url.into())
    }

    /// Convenience constructor for [`MediaHit::Image`].
    pub fn image(url: impl Into<String>) -> Self {
        Self::Image(url.into())
    }

    /// The URL, whichever the kind.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Video(url) | Self::Image(url) => url,
        }
    }
}

/// Finds an illustration for a query through a [`MediaTransport`].
#[derive(Clone, Debug)]
pub struct MediaLookup<T> {
    config: MediaConfig,
    transport: T,
}

impl<T: MediaTransport> MediaLookup<T> {
    /// Creates a lookup.
    pub const fn new(config: MediaConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// The configuration in use.
    pub const fn config(&self) -> &MediaConfig {
        &self.config
    }

    /// Runs one search and returns the first result's URL.
    ///
    /// Unlike [`MediaLookup::find`], every failure is reported.
    pub fn search(&self, kind: MediaKind, query: &str) -> Result<Option<MediaHit>, MediaError> {
        let api_key = self.config.api_key().ok_or(MediaError::MissingCredential)?;
        let request = MediaRequest::new(&self.config, kind, query)?;
        let response = self.transport.fetch(&request, api_key)?;
        if !response.is_success() {
            return Err(MediaError::Provider {
                status: response.status,
                message: provider_message(&response.body),
            });
        }
        let hit = match kind {
            MediaKind::Videos => serde_json::from_str::<VideoPage>(&response.body)?
                .first_url()
                .map(MediaHit::video),
            MediaKind::Photos => serde_json::from_str::<PhotoPage>(&response.body)?
                .first_url()
                .map(MediaHit::image),
        };
        Ok(hit)
    }

    /// Finds a video for `query`, falling back to a photo.
    ///
    /// Returns `Ok(None)` when nothing usable was found, including when a
    /// search failed; failures are logged. The only error is
    /// [`MediaError::MissingCredential`], and an empty query is `Ok(None)`.
    pub fn find(&self, query: &str) -> Result<Option<MediaHit>, MediaError> {
        if self.config.api_key().is_none() {
            log::error!(
                "{} is not defined; media lookup is disabled",
                crate::API_KEY_VAR
            );
            return Err(MediaError::MissingCredential);
        }
        for kind in [MediaKind::Videos, MediaKind::Photos] {
            match self.search(kind, query) {
                Ok(Some(hit)) => return Ok(Some(hit)),
                Ok(None) => log::debug!("no {} for {query:?}", kind.as_str()),
                Err(MediaError::EmptyQuery) => return Ok(None),
                Err(err) => log::warn!("{} search for {query:?} failed: {err}", kind.as_str()),
            }
        }
        Ok(None)
    }
}

/// Extracts `message` (or `error`) from a provider error body.
pub(crate) fn provider_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(|m| m.as_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| "failed to fetch from provider".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Replies from a fixed table and records the kinds it was asked for.
    struct Scripted {
        videos: Result<TransportResponse, String>,
        photos: Result<TransportResponse, String>,
        calls: RefCell<Vec<(MediaKind, String)>>,
    }

    impl Scripted {
        fn new(videos: Result<(u16, &str), &str>, photos: Result<(u16, &str), &str>) -> Self {
            let reply = |r: Result<(u16, &str), &str>| {
                r.map(|(status, body)| TransportResponse {
                    status,
                    body: body.to_owned(),
                })
                .map_err(str::to_owned)
            };
            Self {
                videos: reply(videos),
                photos: reply(photos),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl MediaTransport for Scripted {
        fn fetch(
            &self,
            request: &MediaRequest,
            api_key: &str,
        ) -> Result<TransportResponse, TransportError> {
            assert_eq!(api_key, "key");
            self.calls
                .borrow_mut()
                .push((request.kind, request.query.clone()));
            let reply = match request.kind {
                MediaKind::Videos => &self.videos,
                MediaKind::Photos => &self.photos,
            };
            reply.clone().map_err(TransportError::new)
        }
    }

    const VIDEO: &str =
        r#"{ "videos": [{ "video_files": [{ "quality": "sd", "link": "v.mp4" }] }] }"#;
    const PHOTO: &str = r#"{ "photos": [{ "src": { "large": "p.jpg" } }] }"#;
    const NONE_V: &str = r#"{ "videos": [] }"#;
    const NONE_P: &str = r#"{ "photos": [] }"#;

    fn lookup(t: &Scripted) -> MediaLookup<&Scripted> {
        MediaLookup::new(MediaConfig::with_key("key"), t)
    }

    #[test]
    fn video_wins_when_present() {
        let t = Scripted::new(Ok((200, VIDEO)), Ok((200, PHOTO)));
        assert_eq!(
            lookup(&t).find("lion").expect("configured"),
            Some(MediaHit::video("v.mp4"))
        );
        assert_eq!(t.calls.borrow().len(), 1);
    }

    #[test]
    fn photo_is_the_fallback() {
        let t = Scripted::new(Ok((200, NONE_V)), Ok((200, PHOTO)));
        assert_eq!(
            lookup(&t).find("lion").expect("configured"),
            Some(MediaHit::image("p.jpg"))
        );
        let calls = t.calls.borrow();
        assert_eq!(calls[0], (MediaKind::Videos, "lion".to_owned()));
        assert_eq!(calls[1], (MediaKind::Photos, "lion".to_owned()));
    }

    #[test]
    fn failures_degrade_to_nothing_found() {
        let t = Scripted::new(
            Err("connection reset"),
            Ok((429, r#"{ "error": "Rate limit" }"#)),
        );
        assert_eq!(lookup(&t).find("lion").expect("configured"), None);

        let t = Scripted::new(Ok((200, "<html>")), Ok((200, NONE_P)));
        assert_eq!(lookup(&t).find("lion").expect("configured"), None);
    }

    #[test]
    fn missing_key_is_distinct_from_no_results() {
        let t = Scripted::new(Ok((200, VIDEO)), Ok((200, PHOTO)));
        let unconfigured = MediaLookup::new(MediaConfig::default(), &t);
        let err = unconfigured.find("lion").expect_err("no key");
        assert!(err.is_setup_required());
        assert!(t.calls.borrow().is_empty());
    }

    #[test]
    fn search_reports_provider_errors() {
        let t = Scripted::new(Ok((401, r#"{ "message": "bad key" }"#)), Ok((200, PHOTO)));
        match lookup(&t).search(MediaKind::Videos, "lion") {
            Err(MediaError::Provider { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "bad key");
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn blank_query_finds_nothing_without_a_request() {
        let t = Scripted::new(Ok((200, VIDEO)), Ok((200, PHOTO)));
        assert_eq!(lookup(&t).find("  ").expect("configured"), None);
        assert!(t.calls.borrow().is_empty());
    }
}
