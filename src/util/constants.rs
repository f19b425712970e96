// LogPager - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogPager";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LogPager";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Discovery
// =============================================================================

/// Glob pattern a filename must match to be a candidate log file.
pub const LOG_FILE_PATTERN: &str = "*.log";

/// Directory name, relative to the working directory, searched when no
/// log directory is configured.
pub const DEFAULT_LOGS_DIR_NAME: &str = "logs";

// =============================================================================
// Pagination
// =============================================================================

/// Page index used when the caller does not supply one.
pub const DEFAULT_PAGE: usize = 0;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: usize = 100;

/// Hard upper bound on a configured `max_page_size`.
pub const ABSOLUTE_MAX_PAGE_SIZE: usize = 10_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
