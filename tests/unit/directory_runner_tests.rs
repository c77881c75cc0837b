/*!
 * Tests for directory processing and per-file failure isolation
 */

use anyhow::Result;
use std::fs;
use transcript_normalizer::app_config::Config;
use transcript_normalizer::directory_runner::DirectoryRunner;
use transcript_normalizer::errors::NormalizerError;
use transcript_normalizer::normalization::TextNormalizer;
use crate::common;

fn runner_for(dir: &std::path::Path) -> DirectoryRunner {
    let normalizer = TextNormalizer::from_config(&Config::default()).expect("default table compiles");
    DirectoryRunner::new(normalizer, dir)
}

/// Test that every eligible file is rewritten in place
#[test]
fn test_run_withTranscripts_shouldRewriteInPlace() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let first = common::create_test_file(temp_dir.path(), "first.txt", common::SAMPLE_TRANSCRIPT)?;
    let second = common::create_test_file(temp_dir.path(), "SECOND.TXT", "Mr. Ray, 7 o'clock.")?;

    let report = runner_for(temp_dir.path()).run()?;

    assert_eq!(report.processed_count(), 2);
    assert_eq!(report.failed_count(), 0);
    assert_eq!(fs::read_to_string(&first)?, common::SAMPLE_NORMALIZED);
    assert_eq!(fs::read_to_string(&second)?, "MISTER RAY SEVEN O CLOCK");

    Ok(())
}

/// Test that ineligible entries are skipped without being touched
#[test]
fn test_run_withOtherEntries_shouldSkipThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let notes = common::create_test_file(temp_dir.path(), "notes.md", "Dr. Who")?;
    fs::create_dir(temp_dir.path().join("sub"))?;
    let nested = common::create_test_file(&temp_dir.path().join("sub"), "inner.txt", "Dr. Who")?;

    let report = runner_for(temp_dir.path()).run()?;

    assert_eq!(report.outcomes.len(), 0);
    assert_eq!(fs::read_to_string(&notes)?, "Dr. Who");
    assert_eq!(fs::read_to_string(&nested)?, "Dr. Who");

    Ok(())
}

/// Test that one unreadable file does not stop the others
#[test]
fn test_run_withOneBrokenFile_shouldProcessTheRest() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let good_a = common::create_test_file(temp_dir.path(), "a.txt", "Dr. A")?;
    let broken = common::create_test_bytes(temp_dir.path(), "b.txt", &[0x44, 0x72, 0x2e, 0xff, 0xfe])?;
    let good_c = common::create_test_file(temp_dir.path(), "c.txt", "Mrs. C")?;

    let report = runner_for(temp_dir.path()).run()?;

    assert_eq!(report.processed_count(), 2);
    assert_eq!(report.failed_count(), 1);

    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures[0].0, broken.as_path());
    assert!(matches!(failures[0].1, NormalizerError::Read { .. }));

    assert_eq!(fs::read_to_string(&good_a)?, "DOCTOR A");
    assert_eq!(fs::read_to_string(&good_c)?, "MISSUS C");
    assert_eq!(fs::read(&broken)?, vec![0x44, 0x72, 0x2e, 0xff, 0xfe]);

    let mut processed: Vec<_> = report.processed_paths().map(|p| p.to_path_buf()).collect();
    processed.sort();
    assert_eq!(processed, vec![good_a, good_c]);

    Ok(())
}

/// Test that a missing directory aborts before any file is attempted
#[test]
fn test_run_withMissingDirectory_shouldReturnConfigurationError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("speaker1");

    match runner_for(&missing).run() {
        Err(NormalizerError::DirectoryNotFound(path)) => assert_eq!(path, missing),
        other => panic!("expected missing directory error, got {:?}", other),
    }

    Ok(())
}

/// Test that dry run reports outcomes but leaves files untouched
#[test]
fn test_run_withDryRun_shouldNotWrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "a.txt", "Dr. Lee, 1999.")?;

    let report = runner_for(temp_dir.path()).with_dry_run(true).run()?;

    assert_eq!(report.processed_count(), 1);
    assert_eq!(fs::read_to_string(&file)?, "Dr. Lee, 1999.");

    Ok(())
}

/// Test that an empty directory yields an empty report
#[test]
fn test_run_withEmptyDirectory_shouldReportZero() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let report = runner_for(temp_dir.path()).run()?;

    assert_eq!(report.processed_count(), 0);
    assert!(report.outcomes.is_empty());

    Ok(())
}

/// Test that a dangling symlink with another extension is skipped silently
#[cfg(unix)]
#[test]
fn test_run_withDanglingNonTranscriptSymlink_shouldSkipIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let transcript = common::create_test_file(temp_dir.path(), "a.txt", "Dr. A")?;
    std::os::unix::fs::symlink(temp_dir.path().join("missing.png"), temp_dir.path().join("image.png"))?;

    let report = runner_for(temp_dir.path()).run()?;

    assert_eq!(report.processed_count(), 1);
    assert_eq!(report.failed_count(), 0);
    assert_eq!(fs::read_to_string(&transcript)?, "DOCTOR A");

    Ok(())
}

/// Test that a dangling transcript symlink is reported under its own name
#[cfg(unix)]
#[test]
fn test_run_withDanglingTranscriptSymlink_shouldReportEntryPath() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "a.txt", "Dr. A")?;
    let link = temp_dir.path().join("gone.txt");
    std::os::unix::fs::symlink(temp_dir.path().join("missing.txt"), &link)?;

    let report = runner_for(temp_dir.path()).run()?;

    assert_eq!(report.processed_count(), 1);
    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, link.as_path());
    assert!(matches!(failures[0].1, NormalizerError::DirectoryEntry { .. }));

    Ok(())
}

/// Test that a file which reads fine but cannot be written back is isolated
#[test]
fn test_run_withReadOnlyFile_shouldReportWriteErrorAndContinue() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let locked = common::create_test_file(temp_dir.path(), "locked.txt", "Dr. Locked")?;
    let open = common::create_test_file(temp_dir.path(), "open.txt", "Mrs. Open")?;

    let mut permissions = fs::metadata(&locked)?.permissions();
    permissions.set_readonly(true);
    fs::set_permissions(&locked, permissions.clone())?;

    // Privileged users can write through read-only permissions
    if fs::OpenOptions::new().write(true).open(&locked).is_ok() {
        return Ok(());
    }

    let runner = runner_for(temp_dir.path());
    assert_eq!(runner.input_dir(), temp_dir.path());
    let report = runner.run()?;

    #[allow(clippy::permissions_set_readonly_false)]
    permissions.set_readonly(false);
    fs::set_permissions(&locked, permissions)?;

    assert_eq!(report.processed_count(), 1);
    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, locked.as_path());
    assert!(matches!(failures[0].1, NormalizerError::Write { .. }));

    assert_eq!(fs::read_to_string(&locked)?, "Dr. Locked");
    assert_eq!(fs::read_to_string(&open)?, "MISSUS OPEN");

    Ok(())
}
