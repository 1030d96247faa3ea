//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Inspect and edit the persisted theme of the acme apps
#[derive(Parser)]
#[command(name = "acme-theme", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// App whose theme to use (admin, user, mobile). Uses ACME_THEME_APP if not set.
    #[arg(long, global = true)]
    pub app: Option<String>,

    /// Directory holding theme.db. Uses ACME_THEME_DIR or ~/.acme if not set.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Record key of the stored theme. Uses ACME_THEME_KEY or app-theme if not set.
    #[arg(long, global = true)]
    pub key: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for scripts
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show every slot of the current theme
    Show,
    /// Print one slot value
    Get {
        /// Slot name (e.g. primary, cardForeground, sidebar-ring)
        slot: String,
    },
    /// Overwrite one slot and persist
    Set {
        /// Slot name
        slot: String,
        /// New value, stored as given
        value: String,
    },
    /// Merge a JSON object of slot overrides and persist
    Apply {
        /// Path to a JSON file such as {"primary": "#FF0000"}
        file: PathBuf,
    },
    /// Replace the theme with a built-in palette
    Use {
        /// Palette name (admin, user, mobile, mobile-dark)
        variant: String,
    },
    /// Replace the theme with the app default
    Reset,
    /// Print the theme as CSS custom properties
    Css {
        /// Selector of the emitted block
        #[arg(long, default_value = ":root")]
        selector: String,
    },
    /// List built-in palettes
    Variants,
    /// Show slots where the current theme differs from a palette
    Diff {
        /// Palette name to compare against
        variant: String,
    },
}
