// LogPager - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// Range types validate `from <= to` in their constructors, and serde
// deserialisation is routed through those same constructors, so an
// inverted range can never exist as a value.

use crate::util::error::{ParseLogLevelError, RangeError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Log file metadata (output of extraction)
// =============================================================================

/// Metadata for a single candidate log file, built fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFileMetadata {
    /// File name only, unique within one directory listing.
    pub filename: String,

    /// File length in bytes.
    pub byte_size: u64,

    /// Last modification instant, as local wall-clock time.
    pub last_modified: NaiveDateTime,
}

// =============================================================================
// Ranges
// =============================================================================

/// Inclusive byte-size bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawByteSizeRange")]
pub struct ByteSizeRange {
    from: u64,
    to: u64,
}

impl ByteSizeRange {
    pub fn new(from: u64, to: u64) -> Result<Self, RangeError> {
        if from > to {
            return Err(RangeError::ByteSize { from, to });
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> u64 {
        self.from
    }

    pub fn to(&self) -> u64 {
        self.to
    }

    pub fn contains(&self, size: u64) -> bool {
        self.from <= size && size <= self.to
    }
}

#[derive(Deserialize)]
struct RawByteSizeRange {
    from: u64,
    to: u64,
}

impl TryFrom<RawByteSizeRange> for ByteSizeRange {
    type Error = RangeError;

    fn try_from(raw: RawByteSizeRange) -> Result<Self, Self::Error> {
        Self::new(raw.from, raw.to)
    }
}

/// Inclusive last-modified bounds, in local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    from: NaiveDateTime,
    to: NaiveDateTime,
}

impl DateRange {
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Result<Self, RangeError> {
        if from > to {
            return Err(RangeError::Date { from, to });
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> NaiveDateTime {
        self.from
    }

    pub fn to(&self) -> NaiveDateTime {
        self.to
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.from <= instant && instant <= self.to
    }
}

#[derive(Deserialize)]
struct RawDateRange {
    from: NaiveDateTime,
    to: NaiveDateTime,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = RangeError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.from, raw.to)
    }
}

// =============================================================================
// Log level
// =============================================================================

/// Log levels recognised by the level predicate, least to most severe.
///
/// The textual form is the upper-case name; a file matches a level when any
/// of its lines contains that exact text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Off,
}

impl LogLevel {
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
            LogLevel::Fatal,
            LogLevel::Off,
        ]
    }

    /// The text searched for in file content.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Off => "OFF",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::all()
            .iter()
            .copied()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLogLevelError {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ParseLogLevelError;

    fn try_from(value: String) -> Result<Self, ParseLogLevelError> {
        value.parse()
    }
}

// =============================================================================
// Filter criteria
// =============================================================================

/// Compound filter. Every field is independently optional; `None` adds no
/// constraint. All present fields are AND-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the filename.
    pub file_name_query: Option<String>,

    /// Case-insensitive substring of at least one line of content.
    pub file_content_query: Option<String>,

    #[serde(alias = "byteSizeRangeDto")]
    pub byte_size_range: Option<ByteSizeRange>,

    #[serde(alias = "dateRangeDto")]
    pub date_range: Option<DateRange>,

    /// At least one line must contain the level's textual form.
    pub log_level: Option<LogLevel>,
}

impl FilterCriteria {
    /// Returns true if no constraint is present.
    pub fn is_empty(&self) -> bool {
        self.file_name_query.is_none()
            && self.file_content_query.is_none()
            && self.byte_size_range.is_none()
            && self.date_range.is_none()
            && self.log_level.is_none()
    }

    /// Returns true if evaluating these criteria requires reading file content.
    pub fn needs_content(&self) -> bool {
        self.file_content_query.is_some() || self.log_level.is_some()
    }
}

// =============================================================================
// Page result
// =============================================================================

/// One page of an ordered result set plus the counts describing the whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_elements: usize,
    pub current_page: usize,
    pub total_pages: usize,
}
