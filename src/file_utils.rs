use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::NormalizerError;

// @module: File and directory utilities

/// Extension of transcript files, compared case-insensitively
pub const TRANSCRIPT_EXTENSION: &str = "txt";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @checks: File name ends with `.extension`, ignoring case
    pub fn has_extension<P: AsRef<Path>>(path: P, extension: &str) -> bool {
        let suffix = format!(".{}", extension.trim_start_matches('.').to_ascii_lowercase());
        path.as_ref()
            .file_name()
            .map(|name| name.to_string_lossy().to_ascii_lowercase().ends_with(&suffix))
            .unwrap_or(false)
    }

    /// List regular files directly inside `dir` that carry `extension`.
    ///
    /// Symlinks are followed, subdirectories are not descended into. Eligible
    /// entries that cannot be listed (e.g. a dangling `.txt` symlink) are
    /// returned as errors in place so the caller can report them without losing
    /// the rest of the listing; unlisted entries with other names are skipped.
    pub fn list_files<P: AsRef<Path>>(
        dir: P,
        extension: &str,
    ) -> Vec<Result<PathBuf, NormalizerError>> {
        WalkDir::new(dir.as_ref())
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => {
                    let eligible = entry.file_type().is_file()
                        && Self::has_extension(entry.path(), extension);
                    eligible.then(|| Ok(entry.into_path()))
                }
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf);
                    if let Some(path) = &path {
                        if !Self::has_extension(path, extension) {
                            return None;
                        }
                    }

                    Some(Err(NormalizerError::DirectoryEntry {
                        path: path.unwrap_or_else(|| dir.as_ref().to_path_buf()),
                        reason: e.to_string(),
                    }))
                }
            })
            .collect()
    }

    /// Read a whole UTF-8 file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, NormalizerError> {
        fs::read_to_string(&path).map_err(|source| NormalizerError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// Write a string to a file, replacing its content
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), NormalizerError> {
        fs::write(&path, content).map_err(|source| NormalizerError::Write {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// Display name of a file for log lines
    pub fn display_name<P: AsRef<Path>>(path: P) -> String {
        path.as_ref()
            .file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_else(|| path.as_ref().display().to_string())
    }
}
