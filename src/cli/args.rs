//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode, ConfigSortOrder};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum SortOrder {
    /// Oldest first (default)
    #[default]
    Asc,
    /// Newest first
    Desc,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "daily-color")]
#[command(about = "Pick a random color for today, log it, and rebuild the color site", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Directory holding data.csv and images/ (default: current directory;
    /// scheduled runs should set this or `root` in the config file)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub(crate) root: Option<PathBuf>,

    /// Read configuration from this file instead of the standard locations
    #[arg(long, global = true, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Caption stored with new records
    #[arg(long, global = true)]
    pub(crate) caption: Option<String>,

    /// Timezone that decides today's date (e.g., "Asia/Tokyo", "UTC")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Use this date instead of today (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, global = true)]
    pub(crate) date: Option<String>,

    /// Seed the color generator for reproducible output
    #[arg(long, global = true)]
    pub(crate) seed: Option<u64>,

    /// Command that regenerates the site (e.g., "python3 generate_site.py")
    #[arg(long, global = true, value_name = "CMD")]
    pub(crate) site_command: Option<String>,

    /// Skip site regeneration
    #[arg(long, global = true)]
    pub(crate) no_site: bool,

    /// Image resolution in dots per inch, rounded to a multiple of 100 (max 1200)
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..=1200))]
    pub(crate) dpi: Option<u32>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Sort order for listed records
    #[arg(short, long, global = true, value_enum, default_value = "asc")]
    pub(crate) order: SortOrder,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        // Enum values only override the CLI default
        if self.order == SortOrder::Asc && config.order == Some(ConfigSortOrder::Desc) {
            self.order = SortOrder::Desc;
        }
        if self.color == ColorMode::Auto {
            match config.color {
                Some(ConfigColorMode::Always) => self.color = ColorMode::Always,
                Some(ConfigColorMode::Never) => self.color = ColorMode::Never,
                Some(ConfigColorMode::Auto) | None => {}
            }
        }

        if self.root.is_none() {
            self.root = config.root.clone();
        }
        if self.caption.is_none() {
            self.caption = config.caption.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.dpi.is_none() {
            self.dpi = config.dpi;
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Site command from the CLI (split on whitespace) or the config file
    pub(crate) fn site_argv(&self, config: &Config) -> Option<Vec<String>> {
        if self.no_site {
            return None;
        }
        let argv = match &self.site_command {
            Some(cmd) => cmd.split_whitespace().map(str::to_string).collect(),
            None => config.site_command.clone()?,
        };
        (!argv.is_empty()).then_some(argv)
    }
}
