/*!
 * Transcript text normalization.
 *
 * The pipeline runs four stages in a fixed order:
 * - `ascii_fold`: drop diacritics and non-ASCII characters
 * - `numerals`: spell out digit runs, with year reading for 1900-2099
 * - `abbreviations`: expand abbreviation literals, then strip punctuation
 * - uppercase the result
 *
 * Numbers are spelled before abbreviations are expanded, so an abbreviation
 * glued to digits ("U.S.2024") is matched against the spelled-out words.
 */

pub mod abbreviations;
pub mod ascii_fold;
pub mod numerals;

pub use abbreviations::{strip_punctuation, AbbreviationTable};
pub use ascii_fold::fold_ascii;
pub use numerals::{expand_numbers, EnglishSpeller, NumberSpeller, YEAR_RANGE};

use crate::app_config::Config;
use crate::errors::ConfigError;

/// Maps raw transcript text to its speech-synthesis-friendly form
#[derive(Debug, Clone)]
pub struct TextNormalizer<S = EnglishSpeller> {
    abbreviations: AbbreviationTable,
    speller: S,
}

impl TextNormalizer<EnglishSpeller> {
    /// Create a normalizer that spells numbers in English
    pub fn new(abbreviations: AbbreviationTable) -> Self {
        Self::with_speller(abbreviations, EnglishSpeller)
    }

    /// Create a normalizer from the abbreviation table in a configuration
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(AbbreviationTable::new(&config.abbreviations)?))
    }
}

impl<S: NumberSpeller> TextNormalizer<S> {
    pub fn with_speller(abbreviations: AbbreviationTable, speller: S) -> Self {
        Self { abbreviations, speller }
    }

    pub fn abbreviations(&self) -> &AbbreviationTable {
        &self.abbreviations
    }

    /// Run the whole pipeline over one document
    pub fn normalize(&self, text: &str) -> String {
        let folded = fold_ascii(text);
        let spelled = expand_numbers(&folded, &self.speller);
        let expanded = self.abbreviations.expand(&spelled);
        strip_punctuation(&expanded).to_uppercase()
    }
}
