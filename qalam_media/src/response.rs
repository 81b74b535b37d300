// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Provider response bodies.
//!
//! Only the fields needed to pick a playable URL are modeled; everything
//! else in the provider's JSON is ignored.

use serde::Deserialize;

/// A page of photo search results.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PhotoPage {
    /// Matching photos, best first.
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// One photo.
#[derive(Clone, Debug, Deserialize)]
pub struct Photo {
    /// Renditions by size.
    #[serde(default)]
    pub src: PhotoSources,
}

/// Photo renditions.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PhotoSources {
    /// Large rendition URL.
    pub large: Option<String>,
    /// Medium rendition URL.
    pub medium: Option<String>,
}

/// A page of video search results.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct VideoPage {
    /// Matching videos, best first.
    #[serde(default)]
    pub videos: Vec<Video>,
}

/// One video.
#[derive(Clone, Debug, Deserialize)]
pub struct Video {
    /// Encoded files of the clip.
    #[serde(default)]
    pub video_files: Vec<VideoFile>,
}

/// One encoding of a video.
#[derive(Clone, Debug, Deserialize)]
pub struct VideoFile {
    /// Quality label such as `"sd"` or `"hd"`.
    pub quality: Option<String>,
    /// Direct URL of the file.
    pub link: String,
}

impl PhotoPage {
    /// URL of the first photo: its large rendition, else the medium one.
    #[must_use]
    pub fn first_url(&self) -> Option<&str> {
        let src = &self.photos.first()?.src;
        src.large.as_deref().or(src.medium.as_deref())
    }
}

impl VideoPage {
    /// URL of the first video: its SD file (lighter for tablets), else its
    /// first file.
    #[must_use]
    pub fn first_url(&self) -> Option<&str> {
        let files = &self.videos.first()?.video_files;
        files
            .iter()
            .find(|f| f.quality.as_deref() == Some("sd"))
            .or_else(|| files.first())
            .map(|f| f.link.as_str())
    }
}
