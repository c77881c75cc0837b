/*!
 * Error types for the transcript normalizer.
 *
 * This module contains custom error types for the different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while running the normalizer over a directory
#[derive(Error, Debug)]
pub enum NormalizerError {
    /// The configured input directory is missing
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// A directory entry could not be listed
    #[error("Failed to read directory entry {}: {reason}", .path.display())]
    DirectoryEntry {
        /// Entry path, or the directory when walkdir has none
        path: PathBuf,
        /// Underlying walkdir error
        reason: String,
    },

    /// A file could not be read (including invalid UTF-8 content)
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A file could not be written back
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl NormalizerError {
    /// The file or directory the error refers to
    pub fn path(&self) -> &Path {
        match self {
            Self::DirectoryNotFound(path) => path,
            Self::DirectoryEntry { path, .. } => path,
            Self::Read { path, .. } => path,
            Self::Write { path, .. } => path,
        }
    }
}

/// Errors produced by a number-to-words renderer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpellingError {
    /// The renderer could not spell the value
    #[error("Cannot spell {value}: {reason}")]
    Unsupported {
        /// The value that was rejected
        value: u64,
        /// Renderer-specific reason
        reason: String,
    },
}

/// Errors found while validating a configuration
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// An abbreviation entry has an empty literal
    #[error("Abbreviation #{0} has an empty literal")]
    EmptyLiteral(usize),

    /// An abbreviation literal could not be compiled into a matcher
    #[error("Invalid abbreviation literal {literal:?}: {reason}")]
    InvalidLiteral {
        /// The offending literal
        literal: String,
        /// Why it was rejected
        reason: String,
    },

    /// The input directory is empty
    #[error("Input directory must not be empty")]
    EmptyInputDir,
}
