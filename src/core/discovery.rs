// LogPager - core/discovery.rs
//
// Candidate log file discovery and metadata extraction.
//
// Discovery reads directory entries and file *metadata* (size, mtime) only,
// never file *contents*; content is owned by the filter engine's line scan.
//
// A missing or unreadable directory is not an error here: it yields an
// empty candidate list and the caller decides what "nothing found" means.

use crate::core::model::LogFileMetadata;
use crate::util::constants;
use chrono::{DateTime, Local};
use std::io;
use std::path::{Path, PathBuf};

/// List the candidate log files directly inside `dir`.
///
/// Only regular files whose name matches [`constants::LOG_FILE_PATTERN`]
/// are returned. A symlink counts when its target is a regular file; a
/// dangling link is skipped. Subdirectories are not descended into. The
/// result is sorted ascending by filename.
pub fn discover_log_files(dir: &Path) -> Vec<PathBuf> {
    let pattern = match glob::Pattern::new(constants::LOG_FILE_PATTERN) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(
                pattern = constants::LOG_FILE_PATTERN,
                error = %e,
                "Invalid log file pattern; no candidates"
            );
            return Vec::new();
        }
    };

    // Links are followed so a `.log` symlink is classified by its target.
    let walker = walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    let mut files: Vec<PathBuf> = Vec::new();
    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                // Covers a missing/unreadable root, dangling symlinks and
                // entries that disappear mid-listing.
                tracing::debug!(dir = %dir.display(), error = %e, "Skipping inaccessible entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            tracing::debug!(path = %entry.path().display(), "Skipping non-UTF-8 filename");
            continue;
        };

        if !pattern.matches(file_name) {
            tracing::trace!(file = file_name, "Not a log file");
            continue;
        }

        files.push(entry.into_path());
    }

    files.sort_unstable_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(dir = %dir.display(), candidates = files.len(), "Discovery complete");
    files
}

/// Read a file's byte length and last-modified instant.
///
/// The instant is converted to the local system time zone. The file's
/// content is never opened.
pub fn extract_metadata(path: &Path) -> io::Result<LogFileMetadata> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{}' has no UTF-8 file name", path.display()),
            )
        })?
        .to_string();

    let metadata = std::fs::metadata(path)?;
    let modified = metadata.modified()?;

    Ok(LogFileMetadata {
        filename,
        byte_size: metadata.len(),
        last_modified: DateTime::<Local>::from(modified).naive_local(),
    })
}

// =============================================================================
// Tests
// =============================================================================
