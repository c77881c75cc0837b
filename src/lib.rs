/*!
 * # Transcript Normalizer
 *
 * Rewrites transcript text files into a canonical, speech-synthesis-friendly
 * form.
 *
 * ## Pipeline
 *
 * - Fold to ASCII, dropping diacritics and non-ASCII symbols
 * - Spell out digit runs, reading 1900-2099 as years
 * - Expand abbreviations such as `Dr.` and `Mrs.`
 * - Strip punctuation, collapse whitespace
 * - Uppercase
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management and the default abbreviation table
 * - `normalization`: The text pipeline and its stages
 * - `directory_runner`: In-place processing of a directory with per-file outcomes
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod directory_runner;
pub mod errors;
pub mod file_utils;
pub mod normalization;

// Re-export main types for easier usage
pub use app_config::{AbbreviationEntry, Config};
pub use directory_runner::{DirectoryRunner, FileOutcome, ProcessingReport};
pub use errors::{ConfigError, NormalizerError, SpellingError};
pub use normalization::{AbbreviationTable, EnglishSpeller, NumberSpeller, TextNormalizer};
