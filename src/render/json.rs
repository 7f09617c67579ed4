//! JSON output for rendered elements.

use crate::error::{Error, Result};

use super::Element;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize rendered elements to JSON.
pub fn to_json(elements: &[Element], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(elements),
        JsonFormat::Compact => serde_json::to_string(elements),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{EdgeInsets, TextSpan, Theme};

    fn paragraph() -> Element {
        Element::Paragraph {
            spans: vec![TextSpan::plain("Hello", Theme::default().body)],
            background: Theme::default().background,
            padding: EdgeInsets::horizontal(16.0),
        }
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&[paragraph()], JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"kind\": \"paragraph\""));
        assert!(json.contains("Hello"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&[paragraph(), Element::Placeholder], JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("{\"kind\":\"placeholder\"}"));
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[], JsonFormat::Compact).unwrap(), "[]");
    }
}
