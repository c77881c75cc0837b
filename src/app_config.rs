use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and the default abbreviation table.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the transcript files to rewrite
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Abbreviations expanded before punctuation is stripped, in application order
    #[serde(default = "default_abbreviations")]
    pub abbreviations: Vec<AbbreviationEntry>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// A single abbreviation literal and the words that replace it
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AbbreviationEntry {
    // @field: Literal as written in transcripts, punctuation included
    pub literal: String,

    // @field: Replacement text
    pub expansion: String,
}

impl AbbreviationEntry {
    pub fn new(literal: &str, expansion: &str) -> Self {
        Self {
            literal: literal.to_string(),
            expansion: expansion.to_string(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("inputs").join("speaker1")
}

/// The fixed table shipped with the tool
pub fn default_abbreviations() -> Vec<AbbreviationEntry> {
    vec![
        AbbreviationEntry::new("S.J.C.", "S J C"),
        AbbreviationEntry::new("U.S.", "U S"),
        AbbreviationEntry::new("MR.", "MISTER"),
        AbbreviationEntry::new("DR.", "DOCTOR"),
        AbbreviationEntry::new("MRS.", "MISSUS"),
    ]
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyInputDir);
        }

        if let Some(index) = self.abbreviations.iter().position(|a| a.literal.is_empty()) {
            return Err(ConfigError::EmptyLiteral(index));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            abbreviations: default_abbreviations(),
            log_level: LogLevel::default(),
        }
    }
}
