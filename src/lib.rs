//! yearcode - Current year shortcodes for text content
//!
//! Expands `[year]` shortcodes into the current year or a year range
//! (`[year from="2020"]` becomes `2020-2025`, `mode="short"` gives `2020-25`).

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::YearcodeError;
