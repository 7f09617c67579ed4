//! Rendering module for converting documents into presentational elements.

mod element;
mod json;
pub mod layout;
mod options;
mod renderer;
mod result;
mod style;
mod text;
pub mod visitor;

pub use element::{
    noop_opener, Caption, Element, NumberedItem, PlayOverlay, TapHandler, TextSpan, UrlOpener,
};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use renderer::BlockRenderer;
pub use result::{RenderResult, RenderStats};
pub use style::{Color, EdgeInsets, FontWeight, TextStyle, Theme};
pub use text::to_text;
pub use visitor::{CompositeVisitor, DefaultVisitor, DocumentVisitor, VisitorAction};
