//! Document model types for raw rich-text content.
//!
//! This module mirrors the JSON wire format: a document is an ordered list
//! of typed blocks, each optionally annotated with entity ranges that point
//! into a shared entity map. Media entities are resolved against a
//! [`ContentMap`] supplied alongside the document.

mod content;
mod document;
mod entity;

pub use content::{ContentItem, ContentMap, ImageInfo};
pub use document::{Block, BlockType, Document};
pub use entity::{Entity, EntityData, EntityRange, EntityType};

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
