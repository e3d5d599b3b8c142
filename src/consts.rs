/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Ledger file name, relative to the root directory
pub(crate) const LEDGER_FILE: &str = "data.csv";

/// Image directory name, relative to the root directory
pub(crate) const IMAGES_DIR: &str = "images";

/// First line of a freshly created ledger
pub(crate) const LEDGER_HEADER: &str = "date,hex,rgb,caption,image";

/// Caption stored with every generated record unless overridden
pub(crate) const DEFAULT_CAPTION: &str = "Auto generated color";

/// Output resolution of rendered swatches
pub(crate) const DEFAULT_DPI: u32 = 300;
