/*!
 * In-place normalization of every transcript in a directory.
 *
 * Each eligible file is read whole, normalized in memory and written back to
 * the same path. A failure on one file is recorded in the report and the run
 * moves on; only a missing directory stops the run before any file is touched.
 */

use log::{debug, error, info};
use std::path::{Path, PathBuf};

use crate::errors::NormalizerError;
use crate::file_utils::{FileManager, TRANSCRIPT_EXTENSION};
use crate::normalization::{EnglishSpeller, NumberSpeller, TextNormalizer};

/// Result of processing a single file
#[derive(Debug)]
pub struct FileOutcome {
    /// File the outcome refers to
    pub path: PathBuf,
    /// Success, or the reason the file was left untouched
    pub result: Result<(), NormalizerError>,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of one run, in processing order
#[derive(Debug, Default)]
pub struct ProcessingReport {
    pub outcomes: Vec<FileOutcome>,
}

impl ProcessingReport {
    /// Files whose read, transform and write all succeeded
    pub fn processed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.processed_count()
    }

    pub fn processed_paths(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter(|o| o.is_success())
            .map(|o| o.path.as_path())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &NormalizerError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.path.as_path(), e)))
    }
}

/// Applies a [`TextNormalizer`] to every `.txt` file in a directory
pub struct DirectoryRunner<S = EnglishSpeller> {
    normalizer: TextNormalizer<S>,
    input_dir: PathBuf,
    dry_run: bool,
}

impl<S: NumberSpeller> DirectoryRunner<S> {
    pub fn new<P: Into<PathBuf>>(normalizer: TextNormalizer<S>, input_dir: P) -> Self {
        Self {
            normalizer,
            input_dir: input_dir.into(),
            dry_run: false,
        }
    }

    /// Normalize without writing anything back
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Process every eligible file once, in listing order
    pub fn run(&self) -> Result<ProcessingReport, NormalizerError> {
        info!("Starting data processing in: {}", self.input_dir.display());

        if !FileManager::dir_exists(&self.input_dir) {
            return Err(NormalizerError::DirectoryNotFound(self.input_dir.clone()));
        }

        let mut report = ProcessingReport::default();

        for entry in FileManager::list_files(&self.input_dir, TRANSCRIPT_EXTENSION) {
            let outcome = match entry {
                Ok(path) => {
                    let result = self.process_file(&path);
                    FileOutcome { path, result }
                }
                Err(e) => FileOutcome {
                    path: e.path().to_path_buf(),
                    result: Err(e),
                },
            };

            let file_name = FileManager::display_name(&outcome.path);
            match &outcome.result {
                Ok(()) => info!("Processed: {}", file_name),
                Err(e) => error!("Failed to process {}: {}", file_name, e),
            }

            report.outcomes.push(outcome);
        }

        info!("Completed. Total files processed: {}", report.processed_count());

        Ok(report)
    }

    /// Read, normalize and rewrite one file. Nothing is written unless the
    /// read succeeded.
    pub fn process_file(&self, path: &Path) -> Result<(), NormalizerError> {
        let original = FileManager::read_to_string(path)?;
        let cleaned = self.normalizer.normalize(&original);

        if self.dry_run {
            debug!("Dry run, not writing {}: {}", path.display(), cleaned);
            return Ok(());
        }

        FileManager::write_to_file(path, &cleaned)
    }
}
