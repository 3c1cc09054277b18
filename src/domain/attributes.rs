//! Shortcode attribute parsing

use crate::domain::year::format_year;
use regex::Regex;
use std::sync::OnceLock;

/// Default value of the `mode` attribute
pub const DEFAULT_MODE: &str = "long";

/// Matches `name="value"`, `name='value'`, `name=value` and bare values
fn attribute_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r#"([\w-]+)\s*=\s*"([^"]*)"(?:\s|$)|([\w-]+)\s*=\s*'([^']*)'(?:\s|$)|([\w-]+)\s*=\s*([^\s'"]+)(?:\s|$)|"[^"]*"(?:\s|$)|'[^']*'(?:\s|$)|\S+(?:\s|$)"#,
        )
        .unwrap()
    })
}

/// Split raw attribute text into `(name, value)` pairs.
///
/// Names are lower-cased. Positional values are dropped.
pub fn parse_pairs(text: &str) -> Vec<(String, String)> {
    attribute_regex()
        .captures_iter(text)
        .filter_map(|cap| {
            let pair = |name: usize, value: usize| {
                Some((
                    cap.get(name)?.as_str().to_lowercase(),
                    cap.get(value)?.as_str().to_string(),
                ))
            };
            pair(1, 2).or_else(|| pair(3, 4)).or_else(|| pair(5, 6))
        })
        .collect()
}

/// Attributes recognized by the year shortcode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcodeAttributes {
    /// Start year of the range
    pub from: Option<String>,
    /// `long` or `short`; other values behave as `long`
    pub mode: String,
}

impl Default for ShortcodeAttributes {
    fn default() -> Self {
        ShortcodeAttributes {
            from: None,
            mode: DEFAULT_MODE.to_string(),
        }
    }
}

impl ShortcodeAttributes {
    pub fn new(from: Option<String>, mode: Option<String>) -> Self {
        ShortcodeAttributes {
            from,
            mode: mode.unwrap_or_else(|| DEFAULT_MODE.to_string()),
        }
    }

    /// Parse the text between the tag name and the closing bracket.
    ///
    /// Unknown attributes are ignored; a repeated attribute keeps its last value.
    pub fn parse(text: &str) -> Self {
        Self::from_pairs(&parse_pairs(text))
    }

    /// Pick the recognized attributes out of already-split pairs
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut attributes = ShortcodeAttributes::default();

        for (name, value) in pairs {
            match name.as_str() {
                "from" => attributes.from = Some(value.clone()),
                "mode" => attributes.mode = value.clone(),
                _ => {}
            }
        }

        attributes
    }

    /// Render these attributes against the given current year
    pub fn render(&self, current_year: &str) -> String {
        format_year(current_year, self.from.as_deref(), &self.mode)
    }
}
