// LogPager - core/filter.rs
//
// Composable filter engine for log file metadata.
// All present criteria are AND-combined; absent criteria match everything.
// Core layer: file content arrives through a caller-supplied opener, so the
// engine never touches the filesystem directly.
//
// Read-failure policy: any error while opening or reading a file for a
// content-based predicate excludes that one file. The error is logged and
// absorbed here; it never reaches the listing caller.

use crate::core::model::{FilterCriteria, LogFileMetadata, LogLevel};
use crate::util::error::FilterError;
use std::io::{self, BufRead};

/// Which content-based predicates were satisfied by a scan.
///
/// A predicate that was not requested is reported as satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentMatch {
    pub content: bool,
    pub level: bool,
}

impl ContentMatch {
    pub fn all(&self) -> bool {
        self.content && self.level
    }
}

/// Evaluate `criteria` against one file.
///
/// `None` criteria always match. `open` is called at most once, and only
/// when a content query or log level is present and every metadata
/// predicate has already passed.
pub fn matches<R, F>(metadata: &LogFileMetadata, criteria: Option<&FilterCriteria>, open: F) -> bool
where
    R: BufRead,
    F: FnOnce() -> io::Result<R>,
{
    let Some(criteria) = criteria else {
        return true;
    };

    if !matches_metadata(metadata, criteria) {
        return false;
    }

    if !criteria.needs_content() {
        return true;
    }

    let content_query = criteria.file_content_query.as_deref().map(str::to_lowercase);

    let scan = open()
        .map_err(|source| FilterError::Open {
            filename: metadata.filename.clone(),
            source,
        })
        .and_then(|reader| {
            scan_content(
                reader,
                &metadata.filename,
                content_query.as_deref(),
                criteria.log_level,
            )
        });

    match scan {
        Ok(found) => found.all(),
        Err(e) => {
            tracing::debug!(error = %e, "Excluding file after content read failure");
            false
        }
    }
}

/// Single pass over `reader` evaluating the content query and the log level
/// together.
///
/// `content_query` must already be lower-cased; each line is lower-cased
/// before comparison. The level test is case-sensitive against
/// [`LogLevel::as_str`]. Reading stops as soon as every requested predicate
/// is satisfied. Any line read error aborts the scan with `Err`.
pub fn scan_content<R: BufRead>(
    reader: R,
    filename: &str,
    content_query: Option<&str>,
    level: Option<LogLevel>,
) -> Result<ContentMatch, FilterError> {
    let mut found = ContentMatch {
        content: content_query.is_none(),
        level: level.is_none(),
    };

    if found.all() {
        return Ok(found);
    }

    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|source| FilterError::Read {
            filename: filename.to_string(),
            line_number: idx as u64 + 1,
            source,
        })?;

        if !found.content {
            if let Some(query) = content_query {
                found.content = line.to_lowercase().contains(query);
            }
        }

        if !found.level {
            if let Some(level) = level {
                found.level = line.contains(level.as_str());
            }
        }

        if found.all() {
            break;
        }
    }

    Ok(found)
}

/// Name, byte-size and date predicates; none of them read content.
fn matches_metadata(metadata: &LogFileMetadata, criteria: &FilterCriteria) -> bool {
    // Name filter (case-insensitive substring)
    if let Some(ref query) = criteria.file_name_query {
        if !metadata
            .filename
            .to_lowercase()
            .contains(&query.to_lowercase())
        {
            return false;
        }
    }

    // Byte size filter (inclusive)
    if let Some(ref range) = criteria.byte_size_range {
        if !range.contains(metadata.byte_size) {
            return false;
        }
    }

    // Last-modified filter (inclusive)
    if let Some(ref range) = criteria.date_range {
        if !range.contains(metadata.last_modified) {
            return false;
        }
    }

    true
}
