//! The once-a-day run: check the ledger, generate if needed, rebuild the site

use chrono::NaiveDate;
use tracing::info;

use crate::config::Paths;
use crate::consts::DATE_FORMAT;
use crate::core::color::ColorSource;
use crate::core::ledger::Ledger;
use crate::core::types::ColorRecord;
use crate::error::AppError;
use crate::render::{self, RenderOptions};
use crate::site::SiteBuilder;

/// What happened to today's record
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RunOutcome {
    /// A record for the date already existed
    Skipped { date: NaiveDate },
    /// A new image was written and its row appended
    Generated(ColorRecord),
}

pub(crate) struct DailyRun {
    paths: Paths,
    caption: String,
    render: RenderOptions,
    colors: Box<dyn ColorSource>,
    site: Box<dyn SiteBuilder>,
}

impl DailyRun {
    pub(crate) fn new(
        paths: Paths,
        caption: String,
        render: RenderOptions,
        colors: Box<dyn ColorSource>,
        site: Box<dyn SiteBuilder>,
    ) -> Self {
        DailyRun {
            paths,
            caption,
            render,
            colors,
            site,
        }
    }

    /// Generate the record for `today` unless the ledger already has one.
    /// The image is written before its row is appended.
    pub(crate) fn record(&mut self, today: NaiveDate) -> Result<RunOutcome, AppError> {
        let mut ledger = Ledger::open(&self.paths.ledger)?;
        ledger.ensure_initialized()?;

        let key = today.format(DATE_FORMAT).to_string();
        if ledger.has_entry(&key) {
            info!(date = %key, entries = ledger.len(), "record exists, skipping generation");
            return Ok(RunOutcome::Skipped { date: today });
        }

        let record = ColorRecord::new(today, self.colors.next_color(), &self.caption);
        let outfile = self.paths.root.join(&record.image_path);
        render::write_swatch(&record.hex(), &outfile, &self.render)?;
        ledger.append(&record)?;
        info!(date = %key, hex = %record.color, ledger = %ledger.path().display(), "generated record");
        Ok(RunOutcome::Generated(record))
    }

    /// Rebuild the site; called after `record` whatever its outcome
    pub(crate) fn rebuild_site(&self) -> Result<(), AppError> {
        self.site.rebuild()
    }
}
