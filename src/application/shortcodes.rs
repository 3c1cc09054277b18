//! Shortcode setup use case
//!
//! Resolves the tag once and registers the year handler under it. The
//! resulting service is the single owner of the resolved tag; everything
//! that needs it borrows it from here.

use crate::domain::{
    format_year, usage_examples, ShortcodeAttributes, ShortcodeRegistry, TagRegistration,
    UsageExample, DEFAULT_TAG,
};
use crate::infrastructure::{Clock, Config};
use std::rc::Rc;

/// Command-line overrides layered over the project config
#[derive(Debug, Clone, Default)]
pub struct ShortcodeOptions {
    /// Forced tag, taking precedence over the config `tag`
    pub tag: Option<String>,
    /// Extra tags treated as already registered
    pub registered: Vec<String>,
}

/// Registered year shortcode plus the host registry it lives in
pub struct ShortcodeService {
    registration: TagRegistration,
    registry: ShortcodeRegistry,
    clock: Rc<dyn Clock>,
}

impl ShortcodeService {
    /// Resolve the tag and register the year handler
    pub fn new(config: &Config, options: &ShortcodeOptions, clock: Rc<dyn Clock>) -> Self {
        let mut registry = ShortcodeRegistry::new();

        let exists = |tag: &str| {
            config.is_registered(tag)
                || options.registered.iter().any(|t| t == tag)
                || registry.exists(tag)
        };
        let override_tag = |candidate: String| match &options.tag {
            Some(tag) => tag.clone(),
            None => config.override_tag(candidate),
        };
        let registration = TagRegistration::resolve(DEFAULT_TAG, exists, override_tag);

        let handler_clock = Rc::clone(&clock);
        registry.register(registration.tag(), move |pairs| {
            ShortcodeAttributes::from_pairs(pairs).render(&handler_clock.current_year())
        });

        ShortcodeService {
            registration,
            registry,
            clock,
        }
    }

    /// The tag the year shortcode is registered under
    pub fn tag(&self) -> &str {
        self.registration.tag()
    }

    pub fn current_year(&self) -> String {
        self.clock.current_year()
    }

    /// Expand every year shortcode in `text`
    pub fn render_text(&self, text: &str) -> String {
        self.registry.expand(text)
    }

    /// Expand year shortcodes for writing back to disk, keeping `[[tag]]` escapes
    pub fn render_text_preserving_escapes(&self, text: &str) -> String {
        self.registry.expand_preserving_escapes(text)
    }

    /// Number of year shortcodes in `text`
    pub fn count(&self, text: &str) -> usize {
        self.registry.count(text)
    }

    /// Format the current year directly, without shortcode syntax
    pub fn format(&self, from: Option<&str>, mode: &str) -> String {
        format_year(&self.current_year(), from, mode)
    }

    /// Usage table for the registered tag
    pub fn examples(&self) -> Vec<UsageExample> {
        usage_examples(self.tag(), &self.current_year())
    }
}
