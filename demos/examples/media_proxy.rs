// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The media relay and client lookup against an offline provider.
//!
//! `OfflineProvider` answers like the stock media API would: videos for
//! "lion", photos for anything else, and a 401 for the wrong key. Set
//! `PEXELS_API_KEY` to `demo` to see successful lookups, or leave it unset to
//! see the setup error.
//!
//! Run:
//! - `PEXELS_API_KEY=demo cargo run -p qalam_demos --example media_proxy`

use anyhow::Result;
use qalam_lesson::Category;
use qalam_media::{
    MediaConfig, MediaKind, MediaLookup, MediaProxy, MediaRequest, MediaTransport,
    TransportError, TransportResponse,
};
use serde_json::json;

struct OfflineProvider;

impl MediaTransport for OfflineProvider {
    fn fetch(
        &self,
        request: &MediaRequest,
        api_key: &str,
    ) -> Result<TransportResponse, TransportError> {
        if api_key != "demo" {
            return Ok(TransportResponse {
                status: 401,
                body: json!({ "message": "invalid API key" }).to_string(),
            });
        }
        let body = match (request.kind, request.query.as_str()) {
            (MediaKind::Videos, "lion") => json!({
                "videos": [{ "video_files": [
                    { "quality": "hd", "link": "https://videos.example/lion-hd.mp4" },
                    { "quality": "sd", "link": "https://videos.example/lion-sd.mp4" },
                ] }]
            }),
            (MediaKind::Videos, _) => json!({ "videos": [] }),
            (MediaKind::Photos, query) => json!({
                "photos": [{ "src": { "large": format!("https://photos.example/{query}.jpg") } }]
            }),
        };
        Ok(TransportResponse {
            status: 200,
            body: body.to_string(),
        })
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = MediaConfig::from_env();
    let proxy = MediaProxy::new(config.clone(), OfflineProvider);
    let requests = [
        (None, None),
        (Some("lion"), Some("videos")),
        (Some("duck"), None),
    ];
    for (query, kind) in requests {
        let reply = proxy.handle(query, kind);
        let (status, body) = (reply.status, reply.body);
        println!("GET query={query:?} type={kind:?} -> {status} {body}");
    }

    let lookup = MediaLookup::new(config, OfflineProvider);
    for entry in &Category::ArabicLetters.entries()[..3] {
        match lookup.find(entry.media_query()) {
            Ok(Some(hit)) => println!("{} {}: {hit:?}", entry.glyph, entry.emoji),
            Ok(None) => println!("{} {}: nothing found", entry.glyph, entry.emoji),
            Err(err) if err.is_setup_required() => {
                println!("media is not set up: {err}");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}
