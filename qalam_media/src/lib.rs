// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Qalam Media: find a photo or video illustrating a word.
//!
//! Practice screens show a picture of the current character's example word
//! (a lion for "أسد", an apple for "Apple"). This crate owns the contract
//! for finding one, without performing any network I/O itself:
//!
//! - [`MediaKind`] and [`MediaRequest`] describe a search: photos or videos,
//!   a query, and a page size.
//! - [`MediaTransport`] is implemented by the host with whatever HTTP client
//!   it has; it receives a request plus the API key and returns the status
//!   and body.
//! - [`MediaLookup`] asks for a video first and falls back to a photo,
//!   returning the first playable URL as a [`MediaHit`]. A missing API key is
//!   reported as [`MediaError::MissingCredential`], distinct from `Ok(None)`
//!   ("nothing found"), so a UI can show a setup message instead of an empty
//!   state. Transport and provider failures degrade to "nothing found".
//! - [`MediaProxy`] is the server-side half: it validates query parameters,
//!   attaches the credential, and relays the provider's JSON with an HTTP
//!   status.
//!
//! ```rust
//! use qalam_media::{
//!     MediaConfig, MediaHit, MediaLookup, MediaRequest, MediaTransport, TransportError,
//!     TransportResponse,
//! };
//!
//! struct Canned;
//!
//! impl MediaTransport for Canned {
//!     fn fetch(
//!         &self,
//!         request: &MediaRequest,
//!         _api_key: &str,
//!     ) -> Result<TransportResponse, TransportError> {
//!         let body = match request.kind.as_str() {
//!             "videos" => r#"{ "videos": [] }"#,
//!             _ => r#"{ "photos": [{ "src": { "large": "https://example.com/lion.jpg" } }] }"#,
//!         };
//!         Ok(TransportResponse { status: 200, body: body.to_owned() })
//!     }
//! }
//!
//! let lookup = MediaLookup::new(MediaConfig::with_key("secret"), Canned);
//! let hit = lookup.find("lion").expect("credential is configured");
//! assert_eq!(hit, Some(MediaHit::image("https://example.com/lion.jpg")));
//! ```

mod config;
mod error;
mod lookup;
mod proxy;
mod request;
mod response;

pub use config::{API_KEY_VAR, MediaConfig};
pub use error::{MediaError, TransportError};
pub use lookup::{MediaHit, MediaLookup, MediaTransport, TransportResponse};
pub use proxy::{MediaProxy, ProxyReply};
pub use request::{MediaKind, MediaRequest};
pub use response::{Photo, PhotoPage, PhotoSources, Video, VideoFile, VideoPage};
