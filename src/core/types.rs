use chrono::NaiveDate;

use crate::consts::{DATE_FORMAT, IMAGES_DIR};
use crate::core::color::Color;

/// One day's generated color as stored in the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColorRecord {
    pub(crate) date: NaiveDate,
    pub(crate) color: Color,
    pub(crate) caption: String,
    /// Relative to the root directory, always with forward slashes
    pub(crate) image_path: String,
}

impl ColorRecord {
    pub(crate) fn new(date: NaiveDate, color: Color, caption: &str) -> Self {
        ColorRecord {
            date,
            color,
            caption: caption.to_string(),
            image_path: image_rel_path(date),
        }
    }

    /// Ledger key: "2025-01-15"
    pub(crate) fn date_key(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub(crate) fn hex(&self) -> String {
        self.color.to_hex()
    }

    /// Channels joined by spaces, as stored in the rgb column
    pub(crate) fn rgb_field(&self) -> String {
        let [r, g, b] = self.color.rgb();
        format!("{r} {g} {b}")
    }

    /// Ledger row without the trailing newline. Fields are not escaped.
    pub(crate) fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.date_key(),
            self.hex(),
            self.rgb_field(),
            self.caption,
            self.image_path
        )
    }

    /// Parse a ledger row; `None` for headers and malformed lines
    pub(crate) fn parse_csv_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(',').collect();
        let [date, hex, _rgb, caption, image] = fields.as_slice() else {
            return None;
        };
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;
        let color = Color::from_hex(hex).ok()?;
        Some(ColorRecord {
            date,
            color,
            caption: (*caption).to_string(),
            image_path: (*image).to_string(),
        })
    }
}

/// "images/2025-01-15.png"
pub(crate) fn image_rel_path(date: NaiveDate) -> String {
    format!("{IMAGES_DIR}/{}.png", date.format(DATE_FORMAT))
}
