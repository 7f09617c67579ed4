//! Content map: media metadata resolved by content id.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Image reference with natural dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Image URL
    #[serde(default)]
    pub url: Option<String>,

    /// Natural width in pixels
    #[serde(default)]
    pub width: f32,

    /// Natural height in pixels
    #[serde(default)]
    pub height: f32,
}

impl ImageInfo {
    /// Create a new image reference.
    pub fn new(url: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            url: Some(url.into()),
            width,
            height,
        }
    }
}

/// Media metadata for one content id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Playback or download URL
    #[serde(default)]
    pub url: Option<String>,

    /// Small preview image
    #[serde(default)]
    pub thumbnail: Option<ImageInfo>,

    /// Full-size image
    #[serde(default)]
    pub original_image: Option<ImageInfo>,
}

impl ContentItem {
    /// Create an empty content item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the playback URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the thumbnail.
    pub fn with_thumbnail(mut self, image: ImageInfo) -> Self {
        self.thumbnail = Some(image);
        self
    }

    /// Set the original image.
    pub fn with_original_image(mut self, image: ImageInfo) -> Self {
        self.original_image = Some(image);
        self
    }

    /// Image to display: the original, falling back to the thumbnail.
    pub fn display_image(&self) -> Option<&ImageInfo> {
        self.original_image.as_ref().or(self.thumbnail.as_ref())
    }
}

/// Registry resolving content ids to media metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentMap {
    items: HashMap<String, ContentItem>,
}

impl ContentMap {
    /// Create an empty content map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a content map from a JSON object keyed by content id.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidContentMap(e.to_string()))
    }

    /// Load a content map from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Insert or replace an item.
    pub fn insert(&mut self, content_id: impl Into<String>, item: ContentItem) {
        self.items.insert(content_id.into(), item);
    }

    /// Builder-style insert.
    pub fn with_item(mut self, content_id: impl Into<String>, item: ContentItem) -> Self {
        self.insert(content_id, item);
        self
    }

    /// Look up an item by content id.
    pub fn get(&self, content_id: &str) -> Option<&ContentItem> {
        self.items.get(content_id)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<(String, ContentItem)> for ContentMap {
    fn from_iter<I: IntoIterator<Item = (String, ContentItem)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
