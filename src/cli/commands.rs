//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "yearcode")]
#[command(about = "Current year shortcodes for text content", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Use this as the current year instead of the system date
    #[arg(long, global = true, value_name = "YEAR")]
    pub year: Option<String>,

    /// Force the shortcode tag (overrides the config `tag`)
    #[arg(long, global = true, value_name = "TAG")]
    pub tag: Option<String>,

    /// Tags already taken by other shortcodes (comma-separated)
    #[arg(long, global = true, value_name = "TAGS")]
    pub registered: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a yearcode project config
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set (tag, registered)
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,

        /// Reset the key to its default
        #[arg(long, conflicts_with = "value")]
        unset: bool,
    },

    /// Expand shortcodes in a file, a directory or stdin
    Render {
        /// File or directory to render (default: stdin)
        path: Option<PathBuf>,

        /// Rewrite files in place instead of printing
        #[arg(short, long)]
        write: bool,

        /// File extensions to render when walking a directory
        #[arg(long = "ext", value_delimiter = ',')]
        extensions: Vec<String>,
    },

    /// Print the current year or a year range
    Year {
        /// Start year of the range
        #[arg(long)]
        from: Option<String>,

        /// Range format (long, short)
        #[arg(long, default_value = "long")]
        mode: String,
    },

    /// Print the active shortcode tag
    Tag,

    /// Show usage examples for the active shortcode
    Examples {
        /// Output an HTML fragment instead of a text table
        #[arg(long)]
        html: bool,
    },
}
