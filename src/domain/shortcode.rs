//! Shortcode registry and text expansion

use crate::domain::attributes::parse_pairs;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// `[tag attrs]`, `[tag attrs /]` and the escaped `[[tag attrs]]`
fn shortcode_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\[(\[?)([\w-]+)([^\[\]]*)\](\]?)").unwrap())
}

/// Handler invoked with the `(name, value)` attribute pairs of one occurrence
pub type ShortcodeHandler = Box<dyn Fn(&[(String, String)]) -> String>;

/// Registered shortcodes, keyed by tag
#[derive(Default)]
pub struct ShortcodeRegistry {
    handlers: BTreeMap<String, ShortcodeHandler>,
}

impl fmt::Debug for ShortcodeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcodeRegistry")
            .field("tags", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ShortcodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `tag`, replacing any previous handler
    pub fn register<F>(&mut self, tag: &str, handler: F)
    where
        F: Fn(&[(String, String)]) -> String + 'static,
    {
        tracing::debug!(tag, "registering shortcode");
        self.handlers.insert(tag.to_string(), Box::new(handler));
    }

    /// Check whether a shortcode with this tag is registered
    pub fn exists(&self, tag: &str) -> bool {
        self.handlers.contains_key(tag)
    }

    /// Replace every registered shortcode in `text` with its handler output.
    ///
    /// Unregistered tags are left untouched and `[[tag]]` renders as the
    /// literal `[tag]`.
    pub fn expand(&self, text: &str) -> String {
        self.expand_with(text, false)
    }

    /// Like [`expand`](Self::expand), but `[[tag]]` is kept as written.
    ///
    /// The output can be expanded again without turning escapes into live
    /// shortcodes.
    pub fn expand_preserving_escapes(&self, text: &str) -> String {
        self.expand_with(text, true)
    }

    fn expand_with(&self, text: &str, keep_escapes: bool) -> String {
        if self.handlers.is_empty() {
            return text.to_string();
        }

        shortcode_regex()
            .replace_all(text, |caps: &Captures| self.expand_one(caps, keep_escapes))
            .into_owned()
    }

    /// Count the shortcode occurrences `expand` would replace
    pub fn count(&self, text: &str) -> usize {
        shortcode_regex()
            .captures_iter(text)
            .filter(|caps| self.matching_handler(caps).is_some())
            .filter(|caps| !is_escaped(caps))
            .count()
    }

    fn expand_one(&self, caps: &Captures, keep_escapes: bool) -> String {
        let whole = &caps[0];

        let handler = match self.matching_handler(caps) {
            Some(handler) => handler,
            None => return whole.to_string(),
        };

        if is_escaped(caps) {
            return if keep_escapes {
                whole.to_string()
            } else {
                whole[1..whole.len() - 1].to_string()
            };
        }

        let attributes = attribute_text(&caps[3]);
        let output = handler(&parse_pairs(attributes));
        format!("{}{}{}", &caps[1], output, &caps[4])
    }

    /// Handler for this occurrence, if the tag is registered and properly delimited
    fn matching_handler(&self, caps: &Captures) -> Option<&ShortcodeHandler> {
        let rest = &caps[3];
        let delimited =
            rest.is_empty() || rest.starts_with('/') || rest.starts_with(char::is_whitespace);
        if !delimited {
            return None;
        }
        self.handlers.get(&caps[2])
    }
}

fn is_escaped(caps: &Captures) -> bool {
    !caps[1].is_empty() && !caps[4].is_empty()
}

/// Strip the self-closing slash from the attribute text
fn attribute_text(rest: &str) -> &str {
    let trimmed = rest.trim_end();
    trimmed.strip_suffix('/').unwrap_or(trimmed)
}
