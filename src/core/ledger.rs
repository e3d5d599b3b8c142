//! Append-only CSV ledger of daily colors
//!
//! The set of recorded dates is read once when the ledger is opened and
//! updated on every append, so lookups never rescan the file.

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::consts::LEDGER_HEADER;
use crate::core::types::ColorRecord;
use crate::error::AppError;

pub(crate) struct Ledger {
    path: PathBuf,
    dates: HashSet<String>,
}

impl Ledger {
    /// Open the ledger at `path`. A missing file is an empty ledger.
    pub(crate) fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let dates = match read_optional(&path)? {
            Some(content) => index_dates(&content),
            None => HashSet::new(),
        };
        debug!(path = %path.display(), entries = dates.len(), "opened ledger");
        Ok(Ledger { path, dates })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with its header line if it does not exist yet.
    /// Returns whether a new file was written.
    pub(crate) fn ensure_initialized(&self) -> Result<bool, AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(AppError::io(&self.path, e)),
        };
        writeln!(file, "{LEDGER_HEADER}").map_err(|e| AppError::io(&self.path, e))?;
        debug!(path = %self.path.display(), "created ledger");
        Ok(true)
    }

    /// Whether a row keyed by exactly `date` has been recorded
    pub(crate) fn has_entry(&self, date: &str) -> bool {
        self.dates.contains(date)
    }

    pub(crate) fn len(&self) -> usize {
        self.dates.len()
    }

    /// Append one row. Uniqueness is the caller's concern.
    pub(crate) fn append(&mut self, record: &ColorRecord) -> Result<(), AppError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AppError::io(&self.path, e))?;
        writeln!(file, "{}", record.to_csv_line()).map_err(|e| AppError::io(&self.path, e))?;
        self.dates.insert(record.date_key());
        Ok(())
    }

    /// Every well-formed row, in file order
    pub(crate) fn records(&self) -> Result<Vec<ColorRecord>, AppError> {
        let Some(content) = read_optional(&self.path)? else {
            return Ok(Vec::new());
        };
        let mut records = Vec::new();
        for (idx, line) in data_lines(&content) {
            match ColorRecord::parse_csv_line(line) {
                Some(record) => records.push(record),
                None => warn!(line = idx + 1, path = %self.path.display(), "skipping malformed ledger row"),
            }
        }
        Ok(records)
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AppError::io(path, e)),
    }
}

/// Non-empty lines other than the header, with their zero-based line index
fn data_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty() && *line != LEDGER_HEADER)
}

/// First comma-delimited field of every data row
fn index_dates(content: &str) -> HashSet<String> {
    data_lines(content)
        .filter_map(|(_, line)| line.split(',').next())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_CAPTION;
    use crate::core::color::Color;
    use chrono::NaiveDate;

    fn record(y: i32, m: u32, d: u32, hex: &str) -> ColorRecord {
        ColorRecord::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            Color::from_hex(hex).unwrap(),
            DEFAULT_CAPTION,
        )
    }

    #[test]
    fn missing_file_has_no_entries() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = Ledger::open(dir.path().join("data.csv")).unwrap();
        assert!(!ledger.has_entry("2024-03-15"));
        assert_eq!(ledger.len(), 0);
        assert!(ledger.records().unwrap().is_empty());
    }

    #[test]
    fn ensure_initialized_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data.csv");
        let ledger = Ledger::open(&path).unwrap();
        assert!(ledger.ensure_initialized().unwrap());
        assert!(!ledger.ensure_initialized().unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "date,hex,rgb,caption,image\n");
        assert!(!ledger.has_entry("2024-03-15"));
        assert!(!ledger.has_entry("date"));
    }

    #[test]
    fn ensure_initialized_keeps_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let existing = "date,hex,rgb,caption,image\n2024-03-14,#000000,0 0 0,x,images/2024-03-14.png\n";
        fs::write(&path, existing).unwrap();
        let ledger = Ledger::open(&path).unwrap();
        assert!(!ledger.ensure_initialized().unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), existing);
        assert!(ledger.has_entry("2024-03-14"));
    }

    #[test]
    fn append_then_has_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let mut ledger = Ledger::open(&path).unwrap();
        ledger.ensure_initialized().unwrap();
        ledger.append(&record(2024, 3, 15, "#1A2B3C")).unwrap();
        assert!(ledger.has_entry("2024-03-15"));

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "date,hex,rgb,caption,image\n\
             2024-03-15,#1A2B3C,26 43 60,Auto generated color,images/2024-03-15.png\n"
        );

        // Reopening rebuilds the index from disk.
        let reopened = Ledger::open(&path).unwrap();
        assert!(reopened.has_entry("2024-03-15"));
    }

    #[test]
    fn append_does_not_enforce_uniqueness() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = Ledger::open(dir.path().join("data.csv")).unwrap();
        ledger.ensure_initialized().unwrap();
        ledger.append(&record(2024, 3, 15, "#111111")).unwrap();
        ledger.append(&record(2024, 3, 15, "#222222")).unwrap();
        let records = ledger.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn has_entry_compares_whole_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(
            &path,
            "date,hex,rgb,caption,image\n2024-03-15,#1A2B3C,26 43 60,c,images/2024-03-15.png\n",
        )
        .unwrap();
        let ledger = Ledger::open(&path).unwrap();
        assert!(ledger.has_entry("2024-03-15"));
        assert!(!ledger.has_entry("2024-03-1"));
        assert!(!ledger.has_entry("2024-03-150"));
        assert!(!ledger.has_entry(""));
    }

    #[test]
    fn records_skip_malformed_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(
            &path,
            "date,hex,rgb,caption,image\n\
             2024-03-14,#000000,0 0 0,a,images/2024-03-14.png\n\
             not a row\n\
             \n\
             2024-03-15,#FFFFFF,255 255 255,b,images/2024-03-15.png\n",
        )
        .unwrap();
        let records = Ledger::open(&path).unwrap().records().unwrap();
        let hexes: Vec<_> = records.iter().map(ColorRecord::hex).collect();
        assert_eq!(hexes, ["#000000", "#FFFFFF"]);
    }
}
