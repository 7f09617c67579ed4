//! Plain text output for rendered elements.

use crate::model::EntityType;

use super::Element;

/// Flatten rendered elements into plain text, one element per paragraph.
pub fn to_text(elements: &[Element]) -> String {
    elements
        .iter()
        .filter_map(element_text)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn element_text(element: &Element) -> Option<String> {
    let text = match element {
        Element::Placeholder => return None,
        Element::Heading { text, .. } | Element::Code { text, .. } => text.clone(),
        Element::Quote { text, .. } => format!("> {}", text),
        Element::Paragraph { .. } => element.plain_text(),
        Element::UnorderedListItem { text, .. } => format!("• {}", text),
        Element::OrderedList { items, .. } => items
            .iter()
            .map(|item| format!("{}{}", item.marker(), item.text))
            .collect::<Vec<_>>()
            .join("\n"),
        Element::Media {
            media_type,
            caption,
            ..
        } => {
            let label = if *media_type == EntityType::Video {
                "[video]"
            } else {
                "[image]"
            };
            match caption {
                Some(caption) => format!("{} {}", label, caption.text),
                None => label.to_string(),
            }
        }
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, BlockType, ContentMap, Document};
    use crate::render::{noop_opener, BlockRenderer, RenderOptions};

    #[test]
    fn test_to_text() {
        let doc = Document::new()
            .with_block(Block::new(BlockType::HeaderOne, "Title"))
            .with_block(Block::empty(BlockType::CodeBlock))
            .with_block(Block::new(BlockType::Blockquote, "quoted"))
            .with_block(Block::new(BlockType::UnorderedListItem, "bullet"))
            .with_block(Block::new(BlockType::OrderedListItem, "first"))
            .with_block(Block::new(BlockType::OrderedListItem, "second"));
        let elements =
            BlockRenderer::new(RenderOptions::default(), noop_opener()).render(&doc, &ContentMap::new());

        assert_eq!(
            to_text(&elements),
            "Title\n\n> quoted\n\n• bullet\n\n1. first\n2. second"
        );
    }
}
