/*!
 * Tests for error types and their display
 */

use std::io;
use std::path::PathBuf;
use transcript_normalizer::errors::{ConfigError, NormalizerError, SpellingError};

#[test]
fn test_normalizerError_directoryNotFound_shouldNameDirectory() {
    let error = NormalizerError::DirectoryNotFound(PathBuf::from("inputs/speaker1"));
    let display = format!("{}", error);
    assert!(display.contains("Directory not found"));
    assert!(display.contains("speaker1"));
}

#[test]
fn test_normalizerError_read_shouldIncludePathAndCause() {
    let error = NormalizerError::Read {
        path: PathBuf::from("notes.txt"),
        source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
    };
    let display = format!("{}", error);
    assert!(display.contains("Failed to read notes.txt"));
    assert!(display.contains("valid UTF-8"));
}

#[test]
fn test_normalizerError_write_shouldIncludePathAndCause() {
    let error = NormalizerError::Write {
        path: PathBuf::from("notes.txt"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
    };
    let display = format!("{}", error);
    assert!(display.contains("Failed to write notes.txt"));
    assert!(display.contains("permission denied"));
}

#[test]
fn test_spellingError_unsupported_shouldDisplayValue() {
    let error = SpellingError::Unsupported { value: 7, reason: "refused".to_string() };
    assert_eq!(format!("{}", error), "Cannot spell 7: refused");
}

#[test]
fn test_configError_shouldDisplayCorrectly() {
    assert_eq!(
        format!("{}", ConfigError::EmptyLiteral(2)),
        "Abbreviation #2 has an empty literal"
    );
    assert_eq!(
        format!("{}", ConfigError::EmptyInputDir),
        "Input directory must not be empty"
    );
}
