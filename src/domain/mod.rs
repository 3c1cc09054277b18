//! Domain layer - Year formatting, tag resolution and shortcode expansion

pub mod attributes;
pub mod shortcode;
pub mod tag;
pub mod usage;
pub mod year;

pub use attributes::ShortcodeAttributes;
pub use shortcode::ShortcodeRegistry;
pub use tag::{resolve_tag, TagRegistration, DEFAULT_TAG, FALLBACK_TAG};
pub use usage::{usage_examples, UsageExample};
pub use year::{format_year, YearMode};
