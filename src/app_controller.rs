use anyhow::{Context, Result};
use log::{error, info};
use std::path::PathBuf;

use crate::app_config::Config;
use crate::directory_runner::{DirectoryRunner, ProcessingReport};
use crate::errors::NormalizerError;
use crate::normalization::TextNormalizer;

// @module: Application controller for transcript normalization

/// Main application controller, wires configuration into the runner
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn input_dir(&self) -> &PathBuf {
        &self.config.input_dir
    }

    /// Normalize every transcript in the configured directory.
    ///
    /// A missing directory is logged and yields `Ok(None)`; per-file failures
    /// are only visible in the returned report.
    pub fn run(&self, dry_run: bool) -> Result<Option<ProcessingReport>> {
        let normalizer = TextNormalizer::from_config(&self.config)
            .context("Failed to build abbreviation table")?;

        if dry_run {
            info!("Dry run: files will not be rewritten");
        }

        let runner = DirectoryRunner::new(normalizer, self.config.input_dir.clone())
            .with_dry_run(dry_run);

        match runner.run() {
            Ok(report) => {
                if report.failed_count() > 0 {
                    info!("{} file(s) could not be processed", report.failed_count());
                }
                Ok(Some(report))
            }
            Err(e @ NormalizerError::DirectoryNotFound(_)) => {
                error!("Error: {}", e);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
