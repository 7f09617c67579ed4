//! Geometry and text-range helpers used by the renderer.

use crate::model::{BlockType, Document};

/// Position of an unordered item within its run of consecutive items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPosition {
    pub is_first: bool,
    pub is_last: bool,
}

/// Work out whether the block at `index` opens and/or closes a run of
/// blocks of the same type. A missing neighbour counts as a boundary.
pub fn run_position(doc: &Document, index: usize, block_type: BlockType) -> RunPosition {
    let previous = index.checked_sub(1).and_then(|i| doc.block_type_at(i));
    let next = index.checked_add(1).and_then(|i| doc.block_type_at(i));

    RunPosition {
        is_first: previous != Some(block_type),
        is_last: next != Some(block_type),
    }
}

/// Text split around an entity range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Splice<'a> {
    pub before: &'a str,
    pub inner: &'a str,
    pub after: &'a str,
    /// Whether the requested range had to be clamped to the text
    pub clamped: bool,
}

/// Split `text` at a range measured in UTF-16 code units.
///
/// Ranges running past the end of the text are clamped. A boundary that falls
/// inside a surrogate pair moves forward to the end of that character.
pub fn splice_utf16(text: &str, offset: usize, length: usize) -> Splice<'_> {
    let total = text.encode_utf16().count();
    let start_units = offset.min(total);
    let end_units = offset.saturating_add(length).min(total);
    let clamped = start_units != offset || end_units != offset.saturating_add(length);

    let start = byte_index(text, start_units);
    let end = byte_index(text, end_units).max(start);

    Splice {
        before: &text[..start],
        inner: &text[start..end],
        after: &text[end..],
        clamped,
    }
}

/// Byte index of the first character boundary at or after `units` UTF-16
/// code units.
fn byte_index(text: &str, units: usize) -> usize {
    let mut seen = 0;
    for (idx, ch) in text.char_indices() {
        if seen >= units {
            return idx;
        }
        seen += ch.len_utf16();
    }
    text.len()
}

/// Media size scaled to fit a container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSize {
    pub width: f32,
    pub height: f32,
}

/// Fit an image of natural size `natural_width` x `natural_height` into
/// `available_width`, never upscaling and preserving aspect ratio.
pub fn fit_width(natural_width: f32, natural_height: f32, available_width: f32) -> FitSize {
    let width = natural_width.min(available_width).max(0.0);
    let height = if natural_width > 0.0 {
        width * natural_height / natural_width
    } else {
        0.0
    };
    FitSize { width, height }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    #[test]
    fn test_splice_ascii() {
        let s = splice_utf16("Go to site", 3, 2);
        assert_eq!((s.before, s.inner, s.after), ("Go ", "to", " site"));
        assert!(!s.clamped);
    }

    #[test]
    fn test_splice_counts_utf16_units() {
        // "é" is one unit, the emoji is two
        let text = "é😀 link!";
        let s = splice_utf16(text, 4, 4);
        assert_eq!((s.before, s.inner, s.after), ("é😀 ", "link", "!"));
    }

    #[test]
    fn test_splice_clamps_past_end() {
        let s = splice_utf16("abc", 2, 10);
        assert_eq!((s.before, s.inner, s.after), ("ab", "c", ""));
        assert!(s.clamped);

        let s = splice_utf16("abc", 9, 1);
        assert_eq!((s.before, s.inner, s.after), ("abc", "", ""));
    }

    #[test]
    fn test_splice_inside_surrogate_pair() {
        let s = splice_utf16("a😀b", 2, 1);
        assert_eq!(s.before, "a😀");
        assert_eq!(s.inner, "");
        assert_eq!(s.after, "b");
    }

    #[test]
    fn test_fit_width_scales_down() {
        let size = fit_width(1280.0, 720.0, 343.0);
        assert_eq!(size.width, 343.0);
        assert!((size.height - 192.9375).abs() < 1e-3);
    }

    #[test]
    fn test_fit_width_never_upscales() {
        let size = fit_width(200.0, 100.0, 343.0);
        assert_eq!(size, FitSize { width: 200.0, height: 100.0 });
    }

    #[test]
    fn test_fit_width_zero_natural_width() {
        let size = fit_width(0.0, 100.0, 343.0);
        assert_eq!(size.height, 0.0);
    }

    #[test]
    fn test_run_position_boundaries() {
        let doc = Document::new()
            .with_block(Block::new(BlockType::UnorderedListItem, "a"))
            .with_block(Block::new(BlockType::UnorderedListItem, "b"))
            .with_block(Block::new(BlockType::Unstyled, "p"))
            .with_block(Block::new(BlockType::UnorderedListItem, "c"));

        let ty = BlockType::UnorderedListItem;
        assert_eq!(
            run_position(&doc, 0, ty),
            RunPosition { is_first: true, is_last: false }
        );
        assert_eq!(
            run_position(&doc, 1, ty),
            RunPosition { is_first: false, is_last: true }
        );
        // final block: no following neighbour
        assert_eq!(
            run_position(&doc, 3, ty),
            RunPosition { is_first: true, is_last: true }
        );
    }
}
