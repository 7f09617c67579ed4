//! Visitor pattern for customizing document rendering.
//!
//! A visitor is consulted once per block before the renderer dispatches on
//! the block type. It can let rendering continue, drop the block, or supply
//! its own element in place of the default one.
//!
//! # Example
//!
//! ```
//! use draftkit::render::visitor::{DocumentVisitor, VisitorAction};
//! use draftkit::model::Entity;
//!
//! struct NoVideos;
//!
//! impl DocumentVisitor for NoVideos {
//!     fn visit_media(&mut self, entity: &Entity) -> VisitorAction {
//!         if entity.entity_type == draftkit::model::EntityType::Video {
//!             VisitorAction::Skip
//!         } else {
//!             VisitorAction::Continue
//!         }
//!     }
//! }
//! ```

use super::element::{Element, TextSpan};
use super::style::{Color, EdgeInsets, TextStyle};
use super::Theme;
use crate::model::{Block, Entity};

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the block's element with a custom one.
    Replace(Element),

    /// Skip this block entirely (produce no element).
    Skip,
}

impl VisitorAction {
    pub fn is_continue(&self) -> bool {
        matches!(self, VisitorAction::Continue)
    }

    /// Check if this action indicates the block should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Get the replacement element if available.
    pub fn replacement(&self) -> Option<&Element> {
        match self {
            VisitorAction::Replace(e) => Some(e),
            _ => None,
        }
    }
}

/// Trait for visiting blocks during rendering.
///
/// `visit_block` is called first for every block; if it returns
/// `Continue`, the type-specific hook for that block runs next.
/// All methods return `VisitorAction::Continue` by default.
pub trait DocumentVisitor: Send + Sync {
    /// Called for every block, in document order.
    fn visit_block(&mut self, index: usize, block: &Block) -> VisitorAction {
        let _ = (index, block);
        VisitorAction::Continue
    }

    /// Called for header blocks with text.
    fn visit_heading(&mut self, text: &str, level: u8) -> VisitorAction {
        let _ = (text, level);
        VisitorAction::Continue
    }

    /// Called for unstyled blocks whose first range is a link.
    fn visit_link(&mut self, text: &str, url: &str) -> VisitorAction {
        let _ = (text, url);
        VisitorAction::Continue
    }

    /// Called for list item blocks.
    fn visit_list_item(&mut self, text: &str, ordered: bool) -> VisitorAction {
        let _ = (text, ordered);
        VisitorAction::Continue
    }

    /// Called for atomic blocks whose entity resolves.
    fn visit_media(&mut self, entity: &Entity) -> VisitorAction {
        let _ = entity;
        VisitorAction::Continue
    }

    /// Called before the first block.
    fn on_render_start(&mut self, block_count: usize) {
        let _ = block_count;
    }

    /// Called after the last block.
    fn on_render_end(&mut self, element_count: usize) {
        let _ = element_count;
    }
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentVisitor for DefaultVisitor {}

/// Visitor that drops every media block.
#[derive(Debug, Clone, Default)]
pub struct SkipMediaVisitor;

impl DocumentVisitor for SkipMediaVisitor {
    fn visit_media(&mut self, _entity: &Entity) -> VisitorAction {
        VisitorAction::Skip
    }
}

/// Visitor that renders link paragraphs as plain, non-interactive text.
#[derive(Debug, Clone)]
pub struct PlainLinksVisitor {
    style: TextStyle,
    background: Color,
}

impl PlainLinksVisitor {
    /// Use the body style and background of `theme`.
    pub fn new(theme: &Theme) -> Self {
        Self {
            style: theme.body.clone(),
            background: theme.background,
        }
    }
}

impl DocumentVisitor for PlainLinksVisitor {
    fn visit_link(&mut self, text: &str, _url: &str) -> VisitorAction {
        VisitorAction::Replace(Element::Paragraph {
            spans: vec![TextSpan::plain(text, self.style.clone())],
            background: self.background,
            padding: EdgeInsets::horizontal(16.0).with_bottom(24.0),
        })
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn DocumentVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: DocumentVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    fn first_action<F>(&mut self, mut visit: F) -> VisitorAction
    where
        F: FnMut(&mut Box<dyn DocumentVisitor>) -> VisitorAction,
    {
        for visitor in &mut self.visitors {
            let action = visit(visitor);
            if !action.is_continue() {
                return action;
            }
        }
        VisitorAction::Continue
    }
}

impl Default for CompositeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentVisitor for CompositeVisitor {
    fn visit_block(&mut self, index: usize, block: &Block) -> VisitorAction {
        self.first_action(|v| v.visit_block(index, block))
    }

    fn visit_heading(&mut self, text: &str, level: u8) -> VisitorAction {
        self.first_action(|v| v.visit_heading(text, level))
    }

    fn visit_link(&mut self, text: &str, url: &str) -> VisitorAction {
        self.first_action(|v| v.visit_link(text, url))
    }

    fn visit_list_item(&mut self, text: &str, ordered: bool) -> VisitorAction {
        self.first_action(|v| v.visit_list_item(text, ordered))
    }

    fn visit_media(&mut self, entity: &Entity) -> VisitorAction {
        self.first_action(|v| v.visit_media(entity))
    }

    fn on_render_start(&mut self, block_count: usize) {
        for visitor in &mut self.visitors {
            visitor.on_render_start(block_count);
        }
    }

    fn on_render_end(&mut self, element_count: usize) {
        for visitor in &mut self.visitors {
            visitor.on_render_end(element_count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockType, EntityType};

    #[test]
    fn test_visitor_action_default() {
        assert!(VisitorAction::default().is_continue());
    }

    #[test]
    fn test_visitor_action_replacement() {
        assert!(VisitorAction::Continue.replacement().is_none());
        assert!(VisitorAction::Skip.replacement().is_none());
        assert_eq!(
            VisitorAction::Replace(Element::Placeholder).replacement(),
            Some(&Element::Placeholder)
        );
    }

    #[test]
    fn test_default_visitor() {
        let mut visitor = DefaultVisitor::new();
        let block = Block::new(BlockType::Unstyled, "x");
        assert!(visitor.visit_block(0, &block).is_continue());
    }

    #[test]
    fn test_skip_media_visitor() {
        let mut visitor = SkipMediaVisitor;
        let entity = Entity::media(EntityType::Image, "c1", None);
        assert!(visitor.visit_media(&entity).should_skip());
    }

    #[test]
    fn test_plain_links_visitor() {
        let mut visitor = PlainLinksVisitor::new(&Theme::default());
        let action = visitor.visit_link("Go to site", "http://x");
        let element = action.replacement().unwrap();
        assert_eq!(element.plain_text(), "Go to site");
        assert!(element.tap_handlers().is_empty());
    }

    #[test]
    fn test_composite_visitor() {
        let mut composite = CompositeVisitor::new()
            .with_visitor(SkipMediaVisitor)
            .with_visitor(DefaultVisitor);

        let entity = Entity::media(EntityType::Video, "c1", None);
        assert!(composite.visit_media(&entity).should_skip());
        assert!(composite.visit_heading("Title", 1).is_continue());
    }
}
