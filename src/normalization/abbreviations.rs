/*!
 * Abbreviation expansion and punctuation stripping.
 *
 * Abbreviations are matched on their exact literal form, periods included,
 * ignoring case. They must be expanded before punctuation is stripped since
 * the periods are what identifies them.
 */

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex, RegexBuilder};

use crate::app_config::AbbreviationEntry;
use crate::errors::ConfigError;

/// Anything that is neither a word character nor whitespace
static NON_WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

static WHITESPACE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// A compiled abbreviation
#[derive(Debug, Clone)]
struct Abbreviation {
    literal: String,
    expansion: String,
    pattern: Regex,
}

/// Ordered, immutable table of abbreviations
#[derive(Debug, Clone)]
pub struct AbbreviationTable {
    entries: Vec<Abbreviation>,
}

impl AbbreviationTable {
    /// Compile a table; entries are applied in the order given
    pub fn new(entries: &[AbbreviationEntry]) -> Result<Self, ConfigError> {
        let entries = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                if entry.literal.is_empty() {
                    return Err(ConfigError::EmptyLiteral(index));
                }

                let pattern = RegexBuilder::new(&regex::escape(&entry.literal))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| ConfigError::InvalidLiteral {
                        literal: entry.literal.clone(),
                        reason: e.to_string(),
                    })?;

                Ok(Abbreviation {
                    literal: entry.literal.clone(),
                    expansion: entry.expansion.clone(),
                    pattern,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Literals in application order
    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.literal.as_str())
    }

    /// Replace every occurrence of every literal with its expansion
    pub fn expand(&self, text: &str) -> String {
        let mut result = text.to_string();
        for entry in &self.entries {
            result = entry
                .pattern
                .replace_all(&result, NoExpand(&entry.expansion))
                .into_owned();
        }
        result
    }
}

/// Turn punctuation into spaces, collapse whitespace runs and trim
pub fn strip_punctuation(text: &str) -> String {
    let spaced = NON_WORD_REGEX.replace_all(text, " ");
    WHITESPACE_RUN_REGEX.replace_all(&spaced, " ").trim().to_string()
}
