//! Site regeneration hand-off
//!
//! The site generator is an external program; this crate only knows how to
//! start it and whether it succeeded.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, warn};

use crate::error::{AppError, SiteError};

/// Regenerates the published site from the ledger and images on disk
pub(crate) trait SiteBuilder {
    fn rebuild(&self) -> Result<(), AppError>;
}

/// Runs a fixed command line in the root directory and waits for it
#[derive(Debug, Clone)]
pub(crate) struct CommandSiteBuilder {
    program: String,
    args: Vec<String>,
    workdir: PathBuf,
}

impl CommandSiteBuilder {
    /// `None` when `argv` is empty
    pub(crate) fn from_argv(argv: &[String], workdir: impl Into<PathBuf>) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(CommandSiteBuilder {
            program: program.clone(),
            args: args.to_vec(),
            workdir: workdir.into(),
        })
    }
}

impl SiteBuilder for CommandSiteBuilder {
    fn rebuild(&self) -> Result<(), AppError> {
        debug!(program = %self.program, args = ?self.args, workdir = %self.workdir.display(), "running site builder");
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.workdir)
            .status()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    SiteError::NotFound {
                        program: self.program.clone(),
                    }
                } else {
                    SiteError::Spawn {
                        program: self.program.clone(),
                        source: e,
                    }
                }
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(SiteError::Failed {
                program: self.program.clone(),
                status,
            }
            .into())
        }
    }
}

/// Stand-in used when no site command is configured
pub(crate) struct NoopSiteBuilder;

impl SiteBuilder for NoopSiteBuilder {
    fn rebuild(&self) -> Result<(), AppError> {
        warn!("no site command configured; skipping site regeneration");
        Ok(())
    }
}
