//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, GlobalArgs};
pub use output::{format_config, format_render_summary, format_usage_html, format_usage_table};
