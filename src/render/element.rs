//! Presentational element tree produced by the renderer.
//!
//! Elements are plain data: the host UI layer is responsible for layout and
//! painting. Interactive spans carry a [`TapHandler`] that the host invokes
//! on user interaction; the renderer itself never calls it.

use super::style::{Color, EdgeInsets, TextStyle};
use crate::model::EntityType;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Callback that opens a URL in the host.
pub type UrlOpener = Arc<dyn Fn(&str) + Send + Sync>;

/// An opener that ignores every URL.
pub fn noop_opener() -> UrlOpener {
    Arc::new(|_: &str| {})
}

/// Deferred tap action: a captured URL plus the opener to call with it.
#[derive(Clone)]
pub struct TapHandler {
    url: String,
    opener: UrlOpener,
}

impl TapHandler {
    /// Create a handler that opens `url` when invoked.
    pub fn new(url: impl Into<String>, opener: UrlOpener) -> Self {
        Self {
            url: url.into(),
            opener,
        }
    }

    /// The captured URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether invoking this handler does anything.
    pub fn is_active(&self) -> bool {
        !self.url.is_empty()
    }

    /// Run the tap action. Empty URLs are a no-op.
    pub fn invoke(&self) {
        if self.is_active() {
            (self.opener)(&self.url);
        }
    }
}

impl fmt::Debug for TapHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapHandler").field("url", &self.url).finish()
    }
}

impl PartialEq for TapHandler {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Serialize for TapHandler {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TapHandler", 2)?;
        state.serialize_field("action", "open_url")?;
        state.serialize_field("url", &self.url)?;
        state.end()
    }
}

/// A styled run of text inside a rich paragraph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSpan {
    pub text: String,
    pub style: TextStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_tap: Option<TapHandler>,
}

impl TextSpan {
    /// Plain, non-interactive span.
    pub fn plain(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            on_tap: None,
        }
    }

    /// Span that runs `handler` when tapped.
    pub fn linked(text: impl Into<String>, style: TextStyle, handler: TapHandler) -> Self {
        Self {
            text: text.into(),
            style,
            on_tap: Some(handler),
        }
    }

    pub fn is_link(&self) -> bool {
        self.on_tap.is_some()
    }
}

/// One numbered entry of an ordered list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberedItem {
    /// 1-based position in the list
    pub number: usize,
    pub text: String,
    pub style: TextStyle,
    pub margin_top: f32,
}

impl NumberedItem {
    /// Marker text, e.g. `"2. "`.
    pub fn marker(&self) -> String {
        format!("{}. ", self.number)
    }
}

/// Play button drawn over video media.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayOverlay {
    pub icon_size: f32,
    pub icon_color: Color,
    pub on_tap: TapHandler,
}

/// Caption strip below media.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Caption {
    pub text: String,
    pub style: TextStyle,
    pub border_color: Color,
}

/// A top-level presentational element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    /// Empty box with no visible content
    Placeholder,

    /// Heading text
    Heading {
        level: u8,
        text: String,
        style: TextStyle,
        background: Color,
        padding: EdgeInsets,
    },

    /// Quotation with a left border
    ///
    /// `padding` sits outside the border, `inner_padding` between the border
    /// and the text.
    Quote {
        text: String,
        style: TextStyle,
        border_color: Color,
        border_width: f32,
        inner_padding: EdgeInsets,
        padding: EdgeInsets,
    },

    /// Monospaced block on a tinted background
    ///
    /// `padding` is inside the tinted area, `margin` outside it.
    Code {
        text: String,
        style: TextStyle,
        background: Color,
        padding: EdgeInsets,
        margin: EdgeInsets,
    },

    /// Paragraph made of one or more spans
    Paragraph {
        spans: Vec<TextSpan>,
        background: Color,
        padding: EdgeInsets,
    },

    /// One bullet of an unordered run
    UnorderedListItem {
        text: String,
        style: TextStyle,
        is_first: bool,
        is_last: bool,
        bullet_size: f32,
        bullet_color: Color,
        padding: EdgeInsets,
    },

    /// Every ordered item of the document, numbered from 1
    OrderedList {
        items: Vec<NumberedItem>,
        padding: EdgeInsets,
    },

    /// Embedded image or video
    Media {
        media_type: EntityType,
        image_url: String,
        width: f32,
        height: f32,
        #[serde(skip_serializing_if = "Option::is_none")]
        overlay: Option<PlayOverlay>,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<Caption>,
        padding: EdgeInsets,
    },
}

impl Element {
    /// Short name of the element variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Element::Placeholder => "placeholder",
            Element::Heading { .. } => "heading",
            Element::Quote { .. } => "quote",
            Element::Code { .. } => "code",
            Element::Paragraph { .. } => "paragraph",
            Element::UnorderedListItem { .. } => "unordered_list_item",
            Element::OrderedList { .. } => "ordered_list",
            Element::Media { .. } => "media",
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Element::Placeholder)
    }

    /// Visible text of the element, without list markers.
    pub fn plain_text(&self) -> String {
        match self {
            Element::Placeholder => String::new(),
            Element::Heading { text, .. }
            | Element::Quote { text, .. }
            | Element::Code { text, .. }
            | Element::UnorderedListItem { text, .. } => text.clone(),
            Element::Paragraph { spans, .. } => spans.iter().map(|s| s.text.as_str()).collect(),
            Element::OrderedList { items, .. } => items
                .iter()
                .map(|i| i.text.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            Element::Media { caption, .. } => {
                caption.as_ref().map(|c| c.text.clone()).unwrap_or_default()
            }
        }
    }

    /// Every tap handler attached to this element.
    pub fn tap_handlers(&self) -> Vec<&TapHandler> {
        match self {
            Element::Paragraph { spans, .. } => {
                spans.iter().filter_map(|s| s.on_tap.as_ref()).collect()
            }
            Element::Media {
                overlay: Some(overlay),
                ..
            } => vec![&overlay.on_tap],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording_opener() -> (UrlOpener, Arc<Mutex<Vec<String>>>) {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&opened);
        let opener: UrlOpener = Arc::new(move |url: &str| {
            sink.lock().unwrap().push(url.to_string());
        });
        (opener, opened)
    }

    #[test]
    fn test_tap_handler_invokes_opener() {
        let (opener, opened) = recording_opener();
        let handler = TapHandler::new("http://x", opener);
        handler.invoke();
        handler.invoke();
        assert_eq!(*opened.lock().unwrap(), vec!["http://x", "http://x"]);
    }

    #[test]
    fn test_tap_handler_empty_url_is_noop() {
        let (opener, opened) = recording_opener();
        let handler = TapHandler::new("", opener);
        assert!(!handler.is_active());
        handler.invoke();
        assert!(opened.lock().unwrap().is_empty());
    }

    #[test]
    fn test_tap_handler_equality_ignores_opener() {
        let a = TapHandler::new("u", noop_opener());
        let (opener, _) = recording_opener();
        let b = TapHandler::new("u", opener);
        assert_eq!(a, b);
    }

    #[test]
    fn test_tap_handler_serializes_url() {
        let handler = TapHandler::new("http://x", noop_opener());
        let json = serde_json::to_value(&handler).unwrap();
        assert_eq!(json["url"], "http://x");
        assert_eq!(json["action"], "open_url");
    }

    #[test]
    fn test_element_kind_tag() {
        let json = serde_json::to_value(Element::Placeholder).unwrap();
        assert_eq!(json["kind"], "placeholder");
        assert_eq!(Element::Placeholder.kind_name(), "placeholder");
        assert!(Element::Placeholder.plain_text().is_empty());
    }

    #[test]
    fn test_numbered_item_marker() {
        let item = NumberedItem {
            number: 3,
            text: "x".to_string(),
            style: crate::render::Theme::default().body,
            margin_top: 4.0,
        };
        assert_eq!(item.marker(), "3. ");
    }
}
