//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod render;
pub mod shortcodes;

pub use manage_config::ConfigService;
pub use render::{RenderService, RenderSummary, DEFAULT_EXTENSIONS};
pub use shortcodes::{ShortcodeOptions, ShortcodeService};
