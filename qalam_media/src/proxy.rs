// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Server-side relay that keeps the API key off the client.

use serde_json::{Value, json};

use crate::lookup::provider_message;
use crate::{MediaConfig, MediaKind, MediaRequest, MediaTransport};

/// A JSON reply with an HTTP status, ready for any web framework to send.
#[derive(Clone, Debug, PartialEq)]
pub struct ProxyReply {
    /// HTTP status code.
    pub status: u16,
    /// JSON body.
    pub body: Value,
}

impl ProxyReply {
    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
        }
    }
}

/// Answers media search requests by forwarding them to the provider.
#[derive(Clone, Debug)]
pub struct MediaProxy<T> {
    config: MediaConfig,
    transport: T,
}

impl<T: MediaTransport> MediaProxy<T> {
    /// Creates a proxy.
    pub const fn new(config: MediaConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Handles a request with the given `query` and `type` parameters.
    ///
    /// - 400 when the query is missing or blank.
    /// - 500 with a setup message when no API key is configured.
    /// - The provider's own status when it answers with an error.
    /// - 500 when the provider could not be reached or sent unreadable JSON.
    /// - 200 with the provider's JSON otherwise.
    pub fn handle(&self, query: Option<&str>, kind: Option<&str>) -> ProxyReply {
        let kind = MediaKind::from_param(kind);
        let Some(query) = query.filter(|q| !q.trim().is_empty()) else {
            return ProxyReply::error(400, "Query parameter is required");
        };
        let Some(api_key) = self.config.api_key() else {
            log::error!("{} is not defined in the environment", crate::API_KEY_VAR);
            return ProxyReply {
                status: 500,
                body: json!({
                    "error": "Missing API Key",
                    "message": format!(
                        "Please set {} in the environment variables.",
                        crate::API_KEY_VAR
                    ),
                }),
            };
        };
        let request = match MediaRequest::new(&self.config, kind, query) {
            Ok(request) => request,
            Err(_) => return ProxyReply::error(400, "Query parameter is required"),
        };

        let response = match self.transport.fetch(&request, api_key) {
            Ok(response) => response,
            Err(err) => {
                log::error!("error fetching {}: {err}", kind.as_str());
                return ProxyReply::error(500, "Internal server error");
            }
        };
        if !response.is_success() {
            return ProxyReply::error(response.status, &provider_message(&response.body));
        }
        match serde_json::from_str::<Value>(&response.body) {
            Ok(body) => ProxyReply { status: 200, body },
            Err(err) => {
                log::error!("provider sent unreadable {}: {err}", kind.as_str());
                ProxyReply::error(500, "Internal server error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TransportError, TransportResponse};

    /// Echoes the request back as the provider body.
    struct Echo;

    impl MediaTransport for Echo {
        fn fetch(
            &self,
            request: &MediaRequest,
            api_key: &str,
        ) -> Result<TransportResponse, TransportError> {
            let body = json!({
                "endpoint": request.endpoint,
                "query": request.query,
                "auth": api_key,
            });
            Ok(TransportResponse {
                status: 200,
                body: body.to_string(),
            })
        }
    }

    struct Fixed(Result<(u16, &'static str), &'static str>);

    impl MediaTransport for Fixed {
        fn fetch(&self, _: &MediaRequest, _: &str) -> Result<TransportResponse, TransportError> {
            self.0
                .map(|(status, body)| TransportResponse {
                    status,
                    body: body.to_owned(),
                })
                .map_err(TransportError::new)
        }
    }

    fn configured<T: MediaTransport>(t: T) -> MediaProxy<T> {
        MediaProxy::new(MediaConfig::with_key("k"), t)
    }

    #[test]
    fn query_is_required() {
        let proxy = configured(Echo);
        for query in [None, Some(""), Some("  ")] {
            let reply = proxy.handle(query, None);
            assert_eq!(reply.status, 400);
            assert_eq!(reply.body["error"], "Query parameter is required");
        }
    }

    #[test]
    fn missing_key_is_a_setup_error() {
        let reply = MediaProxy::new(MediaConfig::default(), Echo).handle(Some("lion"), None);
        assert_eq!(reply.status, 500);
        assert_eq!(reply.body["error"], "Missing API Key");
        assert!(
            reply.body["message"]
                .as_str()
                .is_some_and(|m| m.contains("PEXELS_API_KEY"))
        );
    }

    #[test]
    fn passes_provider_json_through() {
        let proxy = configured(Echo);
        let photos = proxy.handle(Some("lion"), None);
        assert_eq!(photos.status, 200);
        assert_eq!(photos.body["endpoint"], "https://api.pexels.com/v1/search");
        assert_eq!(photos.body["auth"], "k");

        let videos = proxy.handle(Some("lion"), Some("videos"));
        assert_eq!(
            videos.body["endpoint"],
            "https://api.pexels.com/videos/search"
        );
    }

    #[test]
    fn relays_provider_errors() {
        let throttled = Fixed(Ok((429, r#"{ "message": "slow down" }"#)));
        let reply = configured(throttled).handle(Some("x"), None);
        assert_eq!(reply, ProxyReply::error(429, "slow down"));

        let reply = configured(Fixed(Ok((503, "unavailable")))).handle(Some("x"), None);
        assert_eq!(reply.status, 503);
        assert_eq!(reply.body["error"], "failed to fetch from provider");
    }

    #[test]
    fn transport_failure_is_internal_error() {
        let reply = configured(Fixed(Err("dns"))).handle(Some("x"), None);
        assert_eq!(reply, ProxyReply::error(500, "Internal server error"));

        let reply = configured(Fixed(Ok((200, "not json")))).handle(Some("x"), None);
        assert_eq!(reply.status, 500);
    }
}
