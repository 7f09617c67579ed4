//! Block-to-element renderer.

use log::{debug, trace, warn};

use crate::model::{Block, BlockType, ContentMap, Document, EntityType};

use super::element::{
    Caption, Element, NumberedItem, PlayOverlay, TapHandler, TextSpan, UrlOpener,
};
use super::layout::{fit_width, run_position, splice_utf16};
use super::style::EdgeInsets;
use super::visitor::{DocumentVisitor, VisitorAction};
use super::{RenderOptions, RenderResult, RenderStats};

const TEXT_PADDING: EdgeInsets = EdgeInsets::only(16.0, 0.0, 16.0, 24.0);
const HEADING_PADDING: EdgeInsets = EdgeInsets::only(16.0, 16.0, 16.0, 24.0);
const CODE_PADDING: EdgeInsets = EdgeInsets::all(16.0);
const CODE_MARGIN: EdgeInsets = EdgeInsets::only(0.0, 0.0, 0.0, 24.0);
const QUOTE_INNER_PADDING: EdgeInsets = EdgeInsets::only(16.0, 0.0, 0.0, 0.0);
const MEDIA_PADDING: EdgeInsets = EdgeInsets::only(16.0, 0.0, 16.0, 32.0);
const LIST_ITEM_GAP: f32 = 4.0;
const RUN_END_SPACING: f32 = 24.0;

/// Renders documents into presentational elements.
///
/// The renderer keeps no state between calls: each [`render`](Self::render)
/// works only from its arguments, so the same document always renders to the
/// same elements.
pub struct BlockRenderer {
    options: RenderOptions,
    opener: UrlOpener,
    visitor: Option<Box<dyn DocumentVisitor>>,
}

impl BlockRenderer {
    /// Create a renderer that attaches `opener` to every tap handler.
    pub fn new(options: RenderOptions, opener: UrlOpener) -> Self {
        Self {
            options,
            opener,
            visitor: None,
        }
    }

    /// Install a visitor consulted for every block.
    pub fn with_visitor(mut self, visitor: Box<dyn DocumentVisitor>) -> Self {
        self.visitor = Some(visitor);
        self
    }

    /// Options in use.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a document to elements in document order.
    pub fn render(&mut self, doc: &Document, content: &ContentMap) -> Vec<Element> {
        let collect = self.options.collect_stats;
        self.render_internal(doc, content, collect).elements
    }

    /// Render a document and collect statistics.
    pub fn render_with_stats(&mut self, doc: &Document, content: &ContentMap) -> RenderResult {
        self.render_internal(doc, content, true)
    }

    fn render_internal(&mut self, doc: &Document, content: &ContentMap, collect: bool) -> RenderResult {
        debug!("rendering document with {} blocks", doc.block_count());

        let actions = self.consult_visitor(doc);

        // Every ordered item the visitor lets through renders as one list,
        // emitted where the first of them appears.
        let ordered: Vec<&Block> = doc
            .blocks
            .iter()
            .zip(&actions)
            .filter(|(b, a)| b.is(BlockType::OrderedListItem) && a.is_continue())
            .map(|(b, _)| b)
            .collect();
        let first_ordered = doc
            .blocks
            .iter()
            .zip(&actions)
            .position(|(b, a)| b.is(BlockType::OrderedListItem) && a.is_continue());

        let mut elements = Vec::with_capacity(doc.block_count());
        let mut stats = RenderStats::new();
        stats.block_count = doc.block_count() as u32;

        for (index, (block, action)) in doc.blocks.iter().zip(actions).enumerate() {
            trace!("block {} ({})", index, block.block_type.as_str());

            let element = match action {
                VisitorAction::Skip => None,
                VisitorAction::Replace(element) => Some(element),
                VisitorAction::Continue => match block.block_type {
                    BlockType::OrderedListItem if first_ordered == Some(index) => {
                        Some(self.ordered_list(&ordered))
                    }
                    BlockType::OrderedListItem => None,
                    _ => self.render_block(doc, content, index, block),
                },
            };

            match element {
                Some(element) => {
                    if collect {
                        stats.add_element(&element);
                    }
                    elements.push(element);
                }
                None => {
                    if collect {
                        stats.add_skipped();
                    }
                }
            }
        }

        if let Some(visitor) = self.visitor.as_mut() {
            visitor.on_render_end(elements.len());
        }
        debug!(
            "rendered {} elements from {} blocks",
            elements.len(),
            doc.block_count()
        );

        RenderResult::new(elements, stats)
    }

    fn consult_visitor(&mut self, doc: &Document) -> Vec<VisitorAction> {
        let Some(visitor) = self.visitor.as_mut() else {
            return vec![VisitorAction::Continue; doc.block_count()];
        };

        visitor.on_render_start(doc.block_count());
        doc.blocks
            .iter()
            .enumerate()
            .map(|(index, block)| visit(visitor.as_mut(), doc, index, block))
            .collect()
    }

    fn render_block(
        &self,
        doc: &Document,
        content: &ContentMap,
        index: usize,
        block: &Block,
    ) -> Option<Element> {
        match block.block_type {
            BlockType::HeaderOne => Some(self.heading(block, 1)),
            BlockType::HeaderTwo => Some(self.heading(block, 2)),
            BlockType::Blockquote => Some(self.quote(block)),
            BlockType::CodeBlock => Some(self.code(block)),
            BlockType::Unstyled => Some(self.unstyled(doc, block)),
            BlockType::UnorderedListItem => Some(self.unordered_item(doc, index, block)),
            BlockType::Atomic => self.atomic(doc, content, block),
            BlockType::OrderedListItem | BlockType::Unknown => None,
        }
    }

    fn heading(&self, block: &Block, level: u8) -> Element {
        let Some(text) = block.renderable_text() else {
            return Element::Placeholder;
        };
        let theme = &self.options.theme;
        let style = if level == 1 {
            theme.heading_one.clone()
        } else {
            theme.heading_two.clone()
        };

        Element::Heading {
            level,
            text: text.to_string(),
            style,
            background: theme.background,
            padding: HEADING_PADDING,
        }
    }

    /// Quotes render even without text.
    fn quote(&self, block: &Block) -> Element {
        let theme = &self.options.theme;
        Element::Quote {
            text: block.text.clone().unwrap_or_default(),
            style: theme.quote.clone(),
            border_color: theme.quote_border,
            border_width: theme.quote_border_width,
            inner_padding: QUOTE_INNER_PADDING,
            padding: TEXT_PADDING,
        }
    }

    fn code(&self, block: &Block) -> Element {
        let Some(text) = block.renderable_text() else {
            return Element::Placeholder;
        };
        let theme = &self.options.theme;
        Element::Code {
            text: text.to_string(),
            style: theme.code.clone(),
            background: theme.code_background,
            padding: CODE_PADDING,
            margin: CODE_MARGIN,
        }
    }

    fn unstyled(&self, doc: &Document, block: &Block) -> Element {
        let Some(text) = block.renderable_text() else {
            return Element::Placeholder;
        };
        let theme = &self.options.theme;

        let spans = match doc.first_entity(block) {
            Some((range, entity)) if entity.is_link() => {
                let splice = splice_utf16(text, range.offset, range.length);
                if splice.clamped {
                    warn!(
                        "link range {}+{} exceeds text of {} UTF-16 units; clamped",
                        range.offset,
                        range.length,
                        text.encode_utf16().count()
                    );
                }
                let url = entity.data.url.clone().unwrap_or_default();
                vec![
                    TextSpan::plain(splice.before, theme.body.clone()),
                    TextSpan::linked(
                        splice.inner,
                        theme.link.clone(),
                        TapHandler::new(url, self.opener.clone()),
                    ),
                    TextSpan::plain(splice.after, theme.body.clone()),
                ]
            }
            _ => vec![TextSpan::plain(text, theme.body.clone())],
        };

        Element::Paragraph {
            spans,
            background: theme.background,
            padding: TEXT_PADDING,
        }
    }

    fn unordered_item(&self, doc: &Document, index: usize, block: &Block) -> Element {
        let theme = &self.options.theme;
        let position = run_position(doc, index, BlockType::UnorderedListItem);
        let top = if position.is_first { 0.0 } else { LIST_ITEM_GAP };
        let bottom = if position.is_last { RUN_END_SPACING } else { 0.0 };

        Element::UnorderedListItem {
            text: block.text.clone().unwrap_or_default(),
            style: theme.body.clone(),
            is_first: position.is_first,
            is_last: position.is_last,
            bullet_size: theme.bullet_size,
            bullet_color: theme.bullet,
            padding: EdgeInsets::only(16.0, top, 16.0, bottom),
        }
    }

    fn ordered_list(&self, blocks: &[&Block]) -> Element {
        let style = &self.options.theme.body;
        let items = blocks
            .iter()
            .enumerate()
            .map(|(i, block)| NumberedItem {
                number: i + 1,
                text: block.text.clone().unwrap_or_default(),
                style: style.clone(),
                margin_top: if i == 0 { 0.0 } else { LIST_ITEM_GAP },
            })
            .collect();

        Element::OrderedList {
            items,
            padding: TEXT_PADDING,
        }
    }

    fn atomic(&self, doc: &Document, content: &ContentMap, block: &Block) -> Option<Element> {
        let Some((_, entity)) = doc.first_entity(block) else {
            trace!("atomic block without a resolvable entity; skipped");
            return None;
        };
        let content_id = entity.data.content_id()?;
        let Some(item) = content.get(content_id) else {
            trace!("content id {} not in content map; skipped", content_id);
            return None;
        };

        if entity.entity_type == EntityType::Attachment {
            return Some(Element::Placeholder);
        }

        let Some(image) = item.display_image() else {
            debug!("content {} has no image; skipped", content_id);
            return None;
        };
        if image.width <= 0.0 {
            warn!("content {} has zero image width", content_id);
        }

        let theme = &self.options.theme;
        let size = fit_width(image.width, image.height, self.options.media_width());

        let overlay = (entity.entity_type == EntityType::Video).then(|| PlayOverlay {
            icon_size: theme.play_icon_size,
            icon_color: theme.play_icon,
            on_tap: TapHandler::new(item.url.clone().unwrap_or_default(), self.opener.clone()),
        });
        let caption = entity.data.title.as_ref().map(|title| Caption {
            text: title.clone(),
            style: theme.caption.clone(),
            border_color: theme.caption_border,
        });

        Some(Element::Media {
            media_type: entity.entity_type,
            image_url: image.url.clone().unwrap_or_default(),
            width: size.width,
            height: size.height,
            overlay,
            caption,
            padding: MEDIA_PADDING,
        })
    }
}

/// Ask the visitor about one block: the generic hook first, then the hook
/// for the block's type.
fn visit(
    visitor: &mut dyn DocumentVisitor,
    doc: &Document,
    index: usize,
    block: &Block,
) -> VisitorAction {
    let action = visitor.visit_block(index, block);
    if !action.is_continue() {
        return action;
    }

    let text = block.text.as_deref().unwrap_or_default();
    match block.block_type {
        BlockType::HeaderOne | BlockType::HeaderTwo if block.renderable_text().is_some() => {
            let level = if block.is(BlockType::HeaderOne) { 1 } else { 2 };
            visitor.visit_heading(text, level)
        }
        BlockType::UnorderedListItem => visitor.visit_list_item(text, false),
        BlockType::OrderedListItem => visitor.visit_list_item(text, true),
        BlockType::Unstyled if block.renderable_text().is_some() => match doc.first_entity(block) {
            Some((_, entity)) if entity.is_link() => {
                visitor.visit_link(text, entity.data.url.as_deref().unwrap_or_default())
            }
            _ => VisitorAction::Continue,
        },
        BlockType::Atomic => match doc.first_entity(block) {
            Some((_, entity)) => visitor.visit_media(entity),
            None => VisitorAction::Continue,
        },
        _ => VisitorAction::Continue,
    }
}
