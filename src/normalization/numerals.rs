/*!
 * Numeral and year expansion.
 *
 * Every maximal run of ASCII digits is replaced by its spoken form. Values in
 * [`YEAR_RANGE`] use year reading ("nineteen eighty-four"), everything else
 * uses cardinal reading ("forty-two"). A run that cannot be parsed or spelled
 * is left exactly as it was.
 */

use std::ops::RangeInclusive;

use log::debug;
use num2words::Num2Words;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::errors::SpellingError;

/// Values read as years rather than plain counts
pub const YEAR_RANGE: RangeInclusive<u64> = 1900..=2099;

/// Maximal digit run, no sign or decimal point awareness
static DIGIT_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Renders integers as words
pub trait NumberSpeller {
    /// Spoken form of a plain count
    fn cardinal(&self, value: u64) -> Result<String, SpellingError>;

    /// Spoken form using year conventions
    fn year(&self, value: u64) -> Result<String, SpellingError>;
}

/// English number words backed by the num2words crate
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishSpeller;

impl EnglishSpeller {
    fn words(value: u64, as_year: bool) -> Result<String, SpellingError> {
        let signed = i64::try_from(value).map_err(|e| SpellingError::Unsupported {
            value,
            reason: e.to_string(),
        })?;

        let speller = if as_year {
            Num2Words::new(signed).year()
        } else {
            Num2Words::new(signed)
        };

        speller.to_words().map_err(|e| SpellingError::Unsupported {
            value,
            reason: format!("{:?}", e),
        })
    }
}

impl NumberSpeller for EnglishSpeller {
    fn cardinal(&self, value: u64) -> Result<String, SpellingError> {
        Self::words(value, false)
    }

    fn year(&self, value: u64) -> Result<String, SpellingError> {
        Self::words(value, true)
    }
}

/// Replace every digit run in `text` with its spoken form
pub fn expand_numbers<S: NumberSpeller + ?Sized>(text: &str, speller: &S) -> String {
    DIGIT_RUN_REGEX
        .replace_all(text, |caps: &Captures| spell_digit_run(&caps[0], speller))
        .into_owned()
}

fn spell_digit_run<S: NumberSpeller + ?Sized>(run: &str, speller: &S) -> String {
    let value: u64 = match run.parse() {
        Ok(value) => value,
        Err(e) => {
            debug!("Leaving digit run {} unchanged: {}", run, e);
            return run.to_string();
        }
    };

    let spelled = if YEAR_RANGE.contains(&value) {
        speller.year(value)
    } else {
        speller.cardinal(value)
    };

    spelled.unwrap_or_else(|e| {
        debug!("Leaving digit run {} unchanged: {}", run, e);
        run.to_string()
    })
}
