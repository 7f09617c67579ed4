//! # draftkit
//!
//! Renders raw rich-text block documents into a tree of presentational
//! elements.
//!
//! A raw document is JSON: an ordered list of typed blocks (headings,
//! paragraphs, quotes, code, list items, embedded media) plus an entity map
//! holding links and media references. Media references are resolved against
//! a [`ContentMap`] supplied by the caller.
//!
//! ## Quick Start
//!
//! ```
//! use draftkit::{render, ContentMap, Element};
//! use std::sync::Arc;
//!
//! fn main() -> draftkit::Result<()> {
//!     let raw = r#"{"blocks": [{"type": "header-one", "text": "Hello"}], "entityMap": {}}"#;
//!     let open_url = Arc::new(|url: &str| println!("open {}", url));
//!
//!     let elements = render(Some(raw), &ContentMap::new(), open_url)?;
//!     assert!(matches!(elements[0], Element::Heading { level: 1, .. }));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Exhaustive block dispatch**: unknown block types are skipped, never an error
//! - **Link splicing**: UTF-16 entity ranges become tappable spans
//! - **Media sizing**: images scale to the container without upscaling
//! - **Visitors**: skip or replace blocks before they render
//! - **Output adapters**: serialize the element tree to JSON or plain text

pub mod error;
pub mod model;
pub mod render;

pub use error::{Error, Result};
pub use model::{
    Block, BlockType, ContentItem, ContentMap, Document, Entity, EntityData, EntityRange,
    EntityType, ImageInfo,
};
pub use render::{
    BlockRenderer, Element, JsonFormat, RenderOptions, RenderResult, RenderStats, TapHandler,
    TextSpan, Theme, UrlOpener,
};

use std::io::Read;
use std::path::Path;

/// Parse a raw document from a JSON string.
///
/// # Example
///
/// ```
/// use draftkit::parse_str;
///
/// let doc = parse_str(r#"{"blocks": [], "entityMap": {}}"#).unwrap();
/// assert!(doc.is_empty());
/// ```
pub fn parse_str(json: &str) -> Result<Document> {
    Document::from_json_str(json)
}

/// Parse a raw document from JSON bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    Document::from_slice(data)
}

/// Parse a raw document from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    Document::from_reader(reader)
}

/// Parse a raw document from a JSON file.
///
/// # Example
///
/// ```no_run
/// use draftkit::parse_file;
///
/// let doc = parse_file("article.json").unwrap();
/// println!("Blocks: {}", doc.block_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let file = std::fs::File::open(path)?;
    parse_reader(std::io::BufReader::new(file))
}

/// Render raw document text with default options.
///
/// Absent or empty input renders to no elements. Malformed JSON is an error.
/// `open_url` is only attached to tap handlers; it is never called here.
pub fn render(
    raw: Option<&str>,
    content_map: &ContentMap,
    open_url: UrlOpener,
) -> Result<Vec<Element>> {
    render_with_options(raw, content_map, open_url, &RenderOptions::default())
}

/// Render raw document text with custom options.
///
/// # Example
///
/// ```
/// use draftkit::{render::noop_opener, render_with_options, ContentMap, RenderOptions};
///
/// let options = RenderOptions::new().with_container_width(600.0);
/// let elements = render_with_options(None, &ContentMap::new(), noop_opener(), &options).unwrap();
/// assert!(elements.is_empty());
/// ```
pub fn render_with_options(
    raw: Option<&str>,
    content_map: &ContentMap,
    open_url: UrlOpener,
    options: &RenderOptions,
) -> Result<Vec<Element>> {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return Ok(Vec::new());
    };
    let doc = parse_str(raw)?;
    Ok(BlockRenderer::new(options.clone(), open_url).render(&doc, content_map))
}

/// Render an already parsed document, returning statistics too.
pub fn render_document(
    doc: &Document,
    content_map: &ContentMap,
    open_url: UrlOpener,
    options: &RenderOptions,
) -> RenderResult {
    BlockRenderer::new(options.clone(), open_url).render_with_stats(doc, content_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::noop_opener;

    #[test]
    fn test_render_none_is_empty() {
        let elements = render(None, &ContentMap::new(), noop_opener()).unwrap();
        assert!(elements.is_empty());
    }

    #[test]
    fn test_render_empty_string_is_empty() {
        let elements = render(Some(""), &ContentMap::new(), noop_opener()).unwrap();
        assert!(elements.is_empty());
    }

    #[test]
    fn test_render_malformed_is_error() {
        let result = render(Some("{\"blocks\": 5}"), &ContentMap::new(), noop_opener());
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_render_null_ranges_and_entity_map() {
        let raw = r#"{"blocks": [{"type": "unstyled", "text": "hello", "entityRanges": null}],
                      "entityMap": null}"#;
        let elements = render(Some(raw), &ContentMap::new(), noop_opener()).unwrap();

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].plain_text(), "hello");
    }

    #[test]
    fn test_parse_bytes_invalid() {
        assert!(parse_bytes(b"").is_err());
        assert!(parse_bytes(b"<html></html>").is_err());
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(
            &path,
            r#"{"blocks": [{"type": "unstyled", "text": "hi"}], "entityMap": {}}"#,
        )
        .unwrap();

        let doc = parse_file(&path).unwrap();
        assert_eq!(doc.block_count(), 1);
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("/definitely/not/here.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_render_document_stats() {
        let doc = parse_str(
            r#"{"blocks": [
                {"type": "header-one", "text": "A"},
                {"type": "ordered-list-item", "text": "x"},
                {"type": "ordered-list-item", "text": "y"}
            ]}"#,
        )
        .unwrap();
        let result = render_document(
            &doc,
            &ContentMap::new(),
            noop_opener(),
            &RenderOptions::default(),
        );

        assert_eq!(result.stats.block_count, 3);
        assert_eq!(result.stats.element_count, 2);
        assert_eq!(result.stats.heading_count, 1);
        assert_eq!(result.stats.list_item_count, 2);
        assert_eq!(result.stats.skipped_count, 1);
    }
}
