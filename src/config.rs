use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{IMAGES_DIR, LEDGER_FILE};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigSortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) root: Option<PathBuf>,
    #[serde(default)]
    pub(crate) caption: Option<String>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    /// Program and arguments, e.g. `["python3", "generate_site.py"]`
    #[serde(default)]
    pub(crate) site_command: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) dpi: Option<u32>,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) order: Option<ConfigSortOrder>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
}

impl Config {
    /// Load `explicit` if given (it must exist and parse), otherwise the
    /// first readable file among the standard locations.
    ///
    /// Runs before logging is set up, so a broken config file in a standard
    /// location is reported straight to stderr.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        if let Some(path) = explicit {
            let content = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
            return Self::parse(&content, path);
        }

        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content, &path) {
                    Ok(config) => return Ok(config),
                    Err(e) => eprintln!("warning: {e}"),
                }
            }
        }

        Ok(Self::default())
    }

    fn parse(content: &str, path: &Path) -> Result<Self, AppError> {
        toml::from_str::<Config>(content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/daily-color/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("daily-color").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/daily-color/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("daily-color").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.daily-color.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".daily-color.toml"));
        }

        paths
    }
}

/// Locations of the ledger and images, all derived from one root directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Paths {
    pub(crate) root: PathBuf,
    pub(crate) images: PathBuf,
    pub(crate) ledger: PathBuf,
}

impl Paths {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Paths {
            images: root.join(IMAGES_DIR),
            ledger: root.join(LEDGER_FILE),
            root,
        }
    }
}
