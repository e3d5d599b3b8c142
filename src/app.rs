use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::cli::Cli;
use crate::config::{Config, Paths};
use crate::consts::{DATE_FORMAT, DEFAULT_CAPTION, DEFAULT_DPI};
use crate::core::color::hex_to_rgb;
use crate::core::{Color, ColorSource, DailyRun, Ledger, RandomColors, RunOutcome};
use crate::error::AppError;
use crate::output::{
    LedgerTableOptions, output_outcome_json, output_records_json, print_ledger_table,
};
use crate::render::{self, RenderOptions};
use crate::site::{CommandSiteBuilder, NoopSiteBuilder, SiteBuilder};
use crate::utils::{Timezone, parse_date};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) config: &'a Config,
    pub(crate) paths: Paths,
    pub(crate) render: RenderOptions,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(cli: &'a Cli, config: &'a Config) -> Result<Self, AppError> {
        let root = match &cli.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().map_err(|e| AppError::io(Path::new("."), e))?,
        };
        debug!(root = %root.display(), "resolved root directory");
        Ok(CommandContext {
            cli,
            config,
            paths: Paths::new(root),
            render: RenderOptions::new(cli.dpi.unwrap_or(DEFAULT_DPI))?,
        })
    }

    /// `--date` if given, otherwise the current date in the configured timezone
    fn today(&self) -> Result<NaiveDate, AppError> {
        let timezone = Timezone::parse(self.cli.timezone.as_deref())?;
        match &self.cli.date {
            Some(raw) => parse_date(raw),
            None => Ok(timezone.today(Utc::now())),
        }
    }

    fn caption(&self) -> Result<String, AppError> {
        let caption = self.cli.caption.as_deref().unwrap_or(DEFAULT_CAPTION);
        if caption.contains([',', '\n', '\r']) {
            return Err(AppError::InvalidCaption {
                input: caption.to_string(),
            });
        }
        Ok(caption.to_string())
    }

    fn color_source(&self) -> Box<dyn ColorSource> {
        match self.cli.seed {
            Some(seed) => Box::new(RandomColors::seeded(seed)),
            None => Box::new(RandomColors::thread()),
        }
    }

    fn site_builder(&self) -> Option<CommandSiteBuilder> {
        let argv = self.cli.site_argv(self.config)?;
        CommandSiteBuilder::from_argv(&argv, &self.paths.root)
    }
}

/// Daily generation followed by site regeneration
pub(crate) fn handle_run(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let today = ctx.today()?;
    let caption = ctx.caption()?;
    let builder = ctx.site_builder();
    let site_rebuilt = builder.is_some();
    let site: Box<dyn SiteBuilder> = match builder {
        Some(builder) => Box::new(builder),
        None => Box::new(NoopSiteBuilder),
    };

    let mut daily = DailyRun::new(
        ctx.paths.clone(),
        caption,
        ctx.render,
        ctx.color_source(),
        site,
    );
    let outcome = daily.record(today)?;

    if !ctx.cli.json {
        match &outcome {
            RunOutcome::Skipped { date } => {
                println!("already exists for {}, skipping generation", date.format(DATE_FORMAT));
            }
            RunOutcome::Generated(record) => {
                let [r, g, b] = record.color.rgb();
                println!(
                    "generated {} {} ({r}, {g}, {b})",
                    record.image_path,
                    record.hex()
                );
            }
        }
    }

    daily.rebuild_site()?;

    if ctx.cli.json {
        println!("{}", output_outcome_json(&outcome, site_rebuilt)?);
    } else if site_rebuilt {
        println!("site regenerated");
    } else {
        println!("done (site regeneration skipped)");
    }
    Ok(())
}

pub(crate) fn handle_list(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let records = Ledger::open(&ctx.paths.ledger)?.records()?;
    if ctx.cli.json {
        println!("{}", output_records_json(&records, ctx.cli.order)?);
        return Ok(());
    }
    if records.is_empty() {
        println!("No colors recorded yet.");
        return Ok(());
    }
    print_ledger_table(
        &records,
        LedgerTableOptions {
            order: ctx.cli.order,
            use_color: ctx.cli.use_color(),
        },
    );
    Ok(())
}

/// Render one swatch outside the ledger
pub(crate) fn handle_render(
    ctx: &CommandContext<'_>,
    hex: &str,
    output: Option<&Path>,
) -> Result<(), AppError> {
    let (r, g, b) = hex_to_rgb(hex)?;
    let hex = Color::new(r, g, b).to_hex();
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => default_render_path(&ctx.paths, &hex),
    };
    render::write_swatch(&hex, &path, &ctx.render)?;
    println!("rendered {} {hex} ({r}, {g}, {b})", path.display());
    Ok(())
}

fn default_render_path(paths: &Paths, hex: &str) -> PathBuf {
    paths
        .images
        .join(format!("{}.png", hex.trim_start_matches('#')))
}
