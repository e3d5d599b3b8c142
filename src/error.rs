use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Invalid hex color \"{input}\" (expected #RRGGBB)")]
    InvalidHex { input: String },

    #[error("Invalid DPI {dpi} (expected 1 to {max})")]
    InvalidDpi { dpi: u32, max: u32 },

    #[error("Invalid caption \"{input}\" (commas and line breaks are not allowed)")]
    InvalidCaption { input: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write PNG {}: {source}", path.display())]
    Png {
        path: PathBuf,
        source: png::EncodingError,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Site(#[from] SiteError),
}

impl AppError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum SiteError {
    #[error("Site builder \"{program}\" not found")]
    NotFound { program: String },

    #[error("Failed to run site builder \"{program}\": {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Site builder \"{program}\" failed ({status})")]
    Failed { program: String, status: ExitStatus },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_date() {
        let e = AppError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYYMMDD or YYYY-MM-DD)"#
        );
    }

    #[test]
    fn app_error_display_timezone() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn app_error_display_hex() {
        let e = AppError::InvalidHex {
            input: "#XYZ".to_string(),
        };
        assert_eq!(e.to_string(), r##"Invalid hex color "#XYZ" (expected #RRGGBB)"##);
    }

    #[test]
    fn app_error_display_dpi() {
        let e = AppError::InvalidDpi { dpi: 0, max: 1200 };
        assert_eq!(e.to_string(), "Invalid DPI 0 (expected 1 to 1200)");
    }

    #[test]
    fn app_error_display_caption() {
        let e = AppError::InvalidCaption {
            input: "a,b".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid caption "a,b" (commas and line breaks are not allowed)"#
        );
    }

    #[test]
    fn app_error_display_io_includes_path() {
        let e = AppError::io(
            Path::new("/tmp/data.csv"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(e.to_string(), "/tmp/data.csv: denied");
    }

    #[test]
    fn site_error_not_found() {
        let e = SiteError::NotFound {
            program: "generate-site".to_string(),
        };
        assert_eq!(e.to_string(), r#"Site builder "generate-site" not found"#);
    }

    #[test]
    fn app_error_from_site_error() {
        let site = SiteError::NotFound {
            program: "build".to_string(),
        };
        let app: AppError = site.into();
        assert_eq!(app.to_string(), r#"Site builder "build" not found"#);
    }
}
