//! Entity annotations and the ranges that attach them to block text.

use serde::{Deserialize, Deserializer, Serialize};

use super::null_as_default;

/// Kind of an out-of-band entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    /// Hyperlink; `data.url` holds the target
    Link,
    /// Embedded image
    Image,
    /// Embedded video
    Video,
    /// File attachment
    Attachment,
    /// Any type this crate does not know about
    #[default]
    #[serde(other)]
    Unknown,
}

impl EntityType {
    /// Check if this entity points at media in the content map.
    pub fn is_media(&self) -> bool {
        matches!(self, EntityType::Image | EntityType::Video)
    }
}

/// An entity referenced from one or more blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity type
    #[serde(rename = "type", default)]
    pub entity_type: EntityType,

    /// Entity payload
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: EntityData,
}

impl Entity {
    /// Create a link entity.
    pub fn link(url: impl Into<String>) -> Self {
        Self {
            entity_type: EntityType::Link,
            data: EntityData {
                url: Some(url.into()),
                ..Default::default()
            },
        }
    }

    /// Create a media entity pointing into the content map.
    pub fn media(
        entity_type: EntityType,
        content_id: impl Into<String>,
        title: Option<String>,
    ) -> Self {
        Self {
            entity_type,
            data: EntityData {
                content_id: Some(content_id.into()),
                title,
                ..Default::default()
            },
        }
    }

    /// Check if this is a link.
    pub fn is_link(&self) -> bool {
        self.entity_type == EntityType::Link
    }
}

/// Entity payload. Which fields are set depends on the entity type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityData {
    /// Link target (LINK)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Content map key (IMAGE, VIDEO, ATTACHMENT)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,

    /// Caption shown under media
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl EntityData {
    /// Content id, if present and non-empty.
    pub fn content_id(&self) -> Option<&str> {
        self.content_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// A span of block text annotated with an entity.
///
/// `offset` and `length` count UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRange {
    /// Key into the document's entity map
    #[serde(deserialize_with = "deserialize_key")]
    pub key: String,

    /// Start of the range in UTF-16 code units
    #[serde(default)]
    pub offset: usize,

    /// Length of the range in UTF-16 code units
    #[serde(default)]
    pub length: usize,
}

impl EntityRange {
    /// Create a new entity range.
    pub fn new(key: impl Into<String>, offset: usize, length: usize) -> Self {
        Self {
            key: key.into(),
            offset,
            length,
        }
    }
}

/// Raw drafts store keys as integers; some producers use strings.
fn deserialize_key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawKey {
        Int(i64),
        Str(String),
    }

    Ok(match RawKey::deserialize(deserializer)? {
        RawKey::Int(n) => n.to_string(),
        RawKey::Str(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_from_wire() {
        let ty: EntityType = serde_json::from_str("\"LINK\"").unwrap();
        assert_eq!(ty, EntityType::Link);
        let ty: EntityType = serde_json::from_str("\"VIDEO\"").unwrap();
        assert_eq!(ty, EntityType::Video);
        let ty: EntityType = serde_json::from_str("\"MENTION\"").unwrap();
        assert_eq!(ty, EntityType::Unknown);
    }

    #[test]
    fn test_entity_range_integer_key() {
        let range: EntityRange =
            serde_json::from_str(r#"{"key": 0, "offset": 3, "length": 2}"#).unwrap();
        assert_eq!(range, EntityRange::new("0", 3, 2));
    }

    #[test]
    fn test_entity_range_string_key() {
        let range: EntityRange = serde_json::from_str(r#"{"key": "7", "offset": 1}"#).unwrap();
        assert_eq!(range.key, "7");
        assert_eq!(range.length, 0);
    }

    #[test]
    fn test_entity_data_camel_case() {
        let entity: Entity = serde_json::from_str(
            r#"{"type": "IMAGE", "data": {"contentId": "c1", "title": "Cover"}}"#,
        )
        .unwrap();
        assert!(entity.entity_type.is_media());
        assert_eq!(entity.data.content_id(), Some("c1"));
        assert_eq!(entity.data.title.as_deref(), Some("Cover"));
    }

    #[test]
    fn test_entity_null_data_defaults() {
        let entity: Entity = serde_json::from_str(r#"{"type": "LINK", "data": null}"#).unwrap();
        assert!(entity.is_link());
        assert_eq!(entity.data, EntityData::default());
    }

    #[test]
    fn test_empty_content_id_is_none() {
        let entity = Entity::media(EntityType::Video, "", None);
        assert_eq!(entity.data.content_id(), None);
    }
}
