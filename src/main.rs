mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod render;
mod site;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use app::{CommandContext, handle_list, handle_render, handle_run};
use cli::{Cli, Commands};
use config::Config;
use error::AppError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::load(cli.config.as_deref())?;
    let cli = cli.with_config(&config);
    init_tracing(cli.debug);
    tracing::debug!(?config, "configuration loaded");
    let ctx = CommandContext::new(&cli, &config)?;

    match &cli.command {
        None | Some(Commands::Run) => handle_run(&ctx),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Render { hex, output }) => handle_render(&ctx, hex, output.as_deref()),
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the level chosen by `--debug`
/// or `debug = true` in the config file.
fn init_tracing(debug: bool) {
    let default_filter = if debug { "daily_color=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
