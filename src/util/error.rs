// LogPager - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use chrono::NaiveDateTime;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogPager operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogPagerError {
    /// A byte-size or date range was constructed with `from > to`.
    Range(RangeError),

    /// A listing, view or download request failed.
    Listing(ListingError),

    /// Export of a result page failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// A criteria file could not be parsed or holds an invalid range.
    Criteria {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for LogPagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(e) => write!(f, "Invalid range: {e}"),
            Self::Listing(e) => write!(f, "{e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Criteria { path, source } => {
                write!(f, "Invalid filter criteria in '{}': {source}", path.display())
            }
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LogPagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Range(e) => Some(e),
            Self::Listing(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Criteria { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Range errors
// ---------------------------------------------------------------------------

/// Raised by the range constructors when the lower bound exceeds the upper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    ByteSize { from: u64, to: u64 },
    Date { from: NaiveDateTime, to: NaiveDateTime },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByteSize { from, to } => write!(
                f,
                "'from' size must be less or equal to 'to' size (from = {from}, to = {to})"
            ),
            Self::Date { from, to } => write!(
                f,
                "'from' date must be earlier or equal to 'to' date (from = {from}, to = {to})"
            ),
        }
    }
}

impl std::error::Error for RangeError {}

impl From<RangeError> for LogPagerError {
    fn from(e: RangeError) -> Self {
        Self::Range(e)
    }
}

/// A log level name that is not one of the recognised levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLogLevelError {
    pub value: String,
}

impl fmt::Display for ParseLogLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown log level '{}' (expected TRACE, DEBUG, INFO, WARN, ERROR, FATAL or OFF)",
            self.value
        )
    }
}

impl std::error::Error for ParseLogLevelError {}

// ---------------------------------------------------------------------------
// Filter errors
// ---------------------------------------------------------------------------

/// Errors raised while evaluating content-based predicates for one file.
///
/// These never leave the filter engine: a file whose content cannot be read
/// is excluded from the result set instead.
#[derive(Debug)]
pub enum FilterError {
    /// The file could not be opened for a content scan.
    Open { filename: String, source: io::Error },

    /// Reading failed part-way through the scan (I/O fault, invalid UTF-8,
    /// file truncated or removed concurrently).
    Read {
        filename: String,
        line_number: u64,
        source: io::Error,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { filename, source } => {
                write!(f, "Cannot open '{filename}' for content scan: {source}")
            }
            Self::Read {
                filename,
                line_number,
                source,
            } => write!(f, "'{filename}' line {line_number}: read failed: {source}"),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Read { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Listing errors
// ---------------------------------------------------------------------------

/// Request-level failures surfaced to the caller of the listing service.
#[derive(Debug)]
pub enum ListingError {
    /// Discovery found no candidate log files at all (before filtering).
    NoLogFiles { dir: PathBuf },

    /// The named log file does not exist in the log directory.
    FileNotFound { filename: String },

    /// The name is not a single plain filename (e.g. contains a separator
    /// or a parent-directory component).
    InvalidFilename { filename: String },

    /// The named log file exists but its content could not be read.
    FileRead { filename: String, source: io::Error },

    /// The requested page size is outside `1..=max`.
    InvalidPageSize { size: usize, max: usize },
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLogFiles { dir } => {
                write!(f, "No log files found in '{}'", dir.display())
            }
            Self::FileNotFound { filename } => {
                write!(f, "No file found with name: {filename}")
            }
            Self::InvalidFilename { filename } => {
                write!(f, "'{filename}' is not a plain log file name")
            }
            Self::FileRead { filename, source } => {
                write!(f, "Error reading log file: {filename}: {source}")
            }
            Self::InvalidPageSize { size, max } => {
                write!(f, "Page size must be between 1 and {max}, got {size}")
            }
        }
    }
}

impl std::error::Error for ListingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ListingError> for LogPagerError {
    fn from(e: ListingError) -> Self {
        Self::Listing(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to writing a result page.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the output.
    Io(io::Error),

    /// CSV serialisation error.
    Csv(csv::Error),

    /// JSON serialisation error.
    Json(serde_json::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(source) => write!(f, "output I/O error: {source}"),
            Self::Csv(source) => write!(f, "CSV output error: {source}"),
            Self::Json(source) => write!(f, "JSON output error: {source}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(source) => Some(source),
            Self::Csv(source) => Some(source),
            Self::Json(source) => Some(source),
        }
    }
}

impl From<ExportError> for LogPagerError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for LogPagerError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
