//! Rendering result with statistics.

use super::Element;
use serde::Serialize;

/// Result of rendering a document, including elements and statistics.
#[derive(Debug, Clone, Serialize)]
pub struct RenderResult {
    /// Rendered elements in document order
    pub elements: Vec<Element>,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(elements: Vec<Element>, stats: RenderStats) -> Self {
        Self { elements, stats }
    }

    /// Number of rendered elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    /// Blocks in the source document
    pub block_count: u32,

    /// Top-level elements emitted
    pub element_count: u32,

    /// Heading elements
    pub heading_count: u32,

    /// Paragraph, quote and code elements
    pub paragraph_count: u32,

    /// Linked spans
    pub link_count: u32,

    /// List items, ordered and unordered
    pub list_item_count: u32,

    /// Media elements
    pub media_count: u32,

    /// Empty placeholders
    pub placeholder_count: u32,

    /// Blocks that produced no element
    pub skipped_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one emitted element.
    pub fn add_element(&mut self, element: &Element) {
        self.element_count += 1;
        match element {
            Element::Placeholder => self.placeholder_count += 1,
            Element::Heading { .. } => self.heading_count += 1,
            Element::Quote { .. } | Element::Code { .. } => self.paragraph_count += 1,
            Element::Paragraph { spans, .. } => {
                self.paragraph_count += 1;
                self.link_count += spans.iter().filter(|s| s.is_link()).count() as u32;
            }
            Element::UnorderedListItem { .. } => self.list_item_count += 1,
            Element::OrderedList { items, .. } => self.list_item_count += items.len() as u32,
            Element::Media { .. } => self.media_count += 1,
        }
    }

    /// Count a block that produced no element.
    pub fn add_skipped(&mut self) {
        self.skipped_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_element_counts_kind() {
        let mut stats = RenderStats::new();
        stats.add_element(&Element::Placeholder);
        stats.add_skipped();

        assert_eq!(stats.element_count, 1);
        assert_eq!(stats.placeholder_count, 1);
        assert_eq!(stats.skipped_count, 1);
    }
}
