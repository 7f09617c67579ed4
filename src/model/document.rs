//! Document-level types.

use super::{null_as_default, Entity, EntityRange};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;

/// A raw rich-text document: ordered blocks plus the entities they reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Blocks in document order
    #[serde(default, deserialize_with = "null_as_default")]
    pub blocks: Vec<Block>,

    /// Entities keyed by entity key
    #[serde(default, deserialize_with = "null_as_default")]
    pub entity_map: HashMap<String, Entity>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserialize a document from its JSON wire form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Deserialize a document from JSON bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Deserialize a document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Append a block.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Builder-style block append.
    pub fn with_block(mut self, block: Block) -> Self {
        self.add_block(block);
        self
    }

    /// Register an entity under a key.
    pub fn add_entity(&mut self, key: impl Into<String>, entity: Entity) {
        self.entity_map.insert(key.into(), entity);
    }

    /// Builder-style entity registration.
    pub fn with_entity(mut self, key: impl Into<String>, entity: Entity) -> Self {
        self.add_entity(key, entity);
        self
    }

    /// Get the number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Look up an entity by key.
    pub fn entity(&self, key: &str) -> Option<&Entity> {
        self.entity_map.get(key)
    }

    /// The entity referenced by a block's first range, with that range.
    ///
    /// Later ranges on the same block are never consulted by the renderer.
    pub fn first_entity<'a>(&'a self, block: &'a Block) -> Option<(&'a EntityRange, &'a Entity)> {
        let range = block.entity_ranges.first()?;
        self.entity(&range.key).map(|entity| (range, entity))
    }

    /// Block type at `index`, if the index is in bounds.
    pub fn block_type_at(&self, index: usize) -> Option<BlockType> {
        self.blocks.get(index).map(|b| b.block_type)
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|b| b.text.as_deref())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Block type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    /// First-level heading
    HeaderOne,
    /// Second-level heading
    HeaderTwo,
    /// Quotation
    Blockquote,
    /// Preformatted code
    CodeBlock,
    /// Plain paragraph
    Unstyled,
    /// Bulleted list item
    UnorderedListItem,
    /// Numbered list item
    OrderedListItem,
    /// Embedded media marker
    Atomic,
    /// Any type this crate does not know about
    #[default]
    #[serde(other)]
    Unknown,
}

impl BlockType {
    /// Wire name of the block type.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::HeaderOne => "header-one",
            BlockType::HeaderTwo => "header-two",
            BlockType::Blockquote => "blockquote",
            BlockType::CodeBlock => "code-block",
            BlockType::Unstyled => "unstyled",
            BlockType::UnorderedListItem => "unordered-list-item",
            BlockType::OrderedListItem => "ordered-list-item",
            BlockType::Atomic => "atomic",
            BlockType::Unknown => "unknown",
        }
    }
}

/// One semantic unit of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Block type
    #[serde(rename = "type", default)]
    pub block_type: BlockType,

    /// Block text; may be absent for non-text blocks
    #[serde(default)]
    pub text: Option<String>,

    /// Entity annotations over the text
    #[serde(default, deserialize_with = "null_as_default")]
    pub entity_ranges: Vec<EntityRange>,
}

impl Block {
    /// Create a block with text.
    pub fn new(block_type: BlockType, text: impl Into<String>) -> Self {
        Self {
            block_type,
            text: Some(text.into()),
            entity_ranges: Vec::new(),
        }
    }

    /// Create a block without text.
    pub fn empty(block_type: BlockType) -> Self {
        Self {
            block_type,
            ..Default::default()
        }
    }

    /// Create an atomic block referencing an entity key.
    pub fn atomic(key: impl Into<String>) -> Self {
        Self::empty(BlockType::Atomic).with_range(EntityRange::new(key, 0, 1))
    }

    /// Attach an entity range.
    pub fn with_range(mut self, range: EntityRange) -> Self {
        self.entity_ranges.push(range);
        self
    }

    /// Text if present and non-empty.
    pub fn renderable_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// Check if this block is of the given type.
    pub fn is(&self, block_type: BlockType) -> bool {
        self.block_type == block_type
    }
}
