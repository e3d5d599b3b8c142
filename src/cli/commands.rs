//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Generate today's color if missing, then rebuild the site (default)
    Run,
    /// Show recorded colors
    List,
    /// Render a single swatch without touching the ledger
    Render {
        /// Color as #RRGGBB
        hex: String,
        /// Output file (default: <root>/images/<RRGGBB>.png)
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}
