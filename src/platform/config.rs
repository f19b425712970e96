// LogPager - platform/config.rs
//
// Platform config directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LogPager configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Default config file (e.g. ~/.config/logpager/config.toml or
    /// %APPDATA%\LogPager\config\config.toml).
    pub config_file: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        let config_dir = match ProjectDirs::from("", "", constants::APP_ID) {
            Some(proj_dirs) => proj_dirs.config_dir().to_path_buf(),
            None => {
                tracing::warn!("Could not determine platform directories, using current directory");
                PathBuf::from(".")
            }
        };
        let config_file = config_dir.join(constants::CONFIG_FILE_NAME);

        tracing::debug!(config = %config_file.display(), "Platform paths resolved");

        Self { config_file }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logs]` section.
    pub logs: LogsSection,
    /// `[listing]` section.
    pub listing: ListingSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[logs]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LogsSection {
    /// Directory holding the application's log files.
    pub directory: Option<PathBuf>,
}

/// `[listing]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ListingSection {
    /// Page size used when a request does not give one.
    pub default_page_size: Option<usize>,
    /// Largest page size a request may ask for.
    pub max_page_size: Option<usize>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration.
///
/// Out-of-range values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory scanned for log files. Relative paths resolve against the
    /// working directory.
    pub log_dir: PathBuf,

    pub default_page_size: usize,

    pub max_page_size: usize,

    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(constants::DEFAULT_LOGS_DIR_NAME),
            default_page_size: constants::DEFAULT_PAGE_SIZE,
            max_page_size: constants::MAX_PAGE_SIZE,
            log_level: None,
        }
    }
}

/// Load and validate the config file at `config_path`.
///
/// Returns the validated config and a list of non-fatal warnings. A missing
/// file yields defaults with no warnings. An unreadable or unparseable file
/// is an error.
pub fn load_config(config_path: &Path) -> Result<(AppConfig, Vec<String>), ConfigError> {
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config file found; using defaults");
        return Ok((AppConfig::default(), Vec::new()));
    }

    let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Io {
        path: config_path.to_path_buf(),
        source,
    })?;

    let raw: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: config_path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %config_path.display(), "Loaded config file");

    Ok(validate(raw))
}

/// Validate each field against named constants, accumulating all warnings.
fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- Logs: directory --
    if let Some(dir) = raw.logs.directory {
        if dir.as_os_str().is_empty() {
            warnings.push(format!(
                "[logs] directory is empty. Using default ({}).",
                constants::DEFAULT_LOGS_DIR_NAME
            ));
        } else {
            config.log_dir = dir;
        }
    }

    // -- Listing: max_page_size (validated first; bounds default_page_size) --
    if let Some(max) = raw.listing.max_page_size {
        if (1..=constants::ABSOLUTE_MAX_PAGE_SIZE).contains(&max) {
            config.max_page_size = max;
        } else {
            warnings.push(format!(
                "[listing] max_page_size = {max} is out of range (1-{}). Using default ({}).",
                constants::ABSOLUTE_MAX_PAGE_SIZE,
                constants::MAX_PAGE_SIZE,
            ));
        }
    }

    // -- Listing: default_page_size --
    if let Some(size) = raw.listing.default_page_size {
        if (1..=config.max_page_size).contains(&size) {
            config.default_page_size = size;
        } else {
            warnings.push(format!(
                "[listing] default_page_size = {size} is out of range (1-{}). Using default ({}).",
                config.max_page_size,
                constants::DEFAULT_PAGE_SIZE,
            ));
        }
    }
    // A lowered max may leave the built-in default above it.
    config.default_page_size = config.default_page_size.min(config.max_page_size);

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolved_config_file_name() {
        let paths = PlatformPaths::resolve();
        assert_eq!(
            paths.config_file.file_name().and_then(|n| n.to_str()),
            Some(constants::CONFIG_FILE_NAME)
        );
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[logs]
directory = "/var/log/myapp"

[listing]
default_page_size = 50
max_page_size = 200

[logging]
level = "DEBUG"

[future]
unknown = true
"#,
        )
        .unwrap();

        let (config, warnings) = load_config(&path).unwrap();
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/myapp"));
        assert_eq!(config.default_page_size, 50);
        assert_eq!(config.max_page_size, 200);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_fall_back_with_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[listing]
default_page_size = 0
max_page_size = 999999

[logging]
level = "loud"
"#,
        )
        .unwrap();

        let (config, warnings) = load_config(&path).unwrap();
        assert_eq!(warnings.len(), 3, "got: {warnings:?}");
        assert_eq!(config.default_page_size, constants::DEFAULT_PAGE_SIZE);
        assert_eq!(config.max_page_size, constants::MAX_PAGE_SIZE);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_small_max_clamps_default_page_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[listing]\nmax_page_size = 5\n").unwrap();

        let (config, warnings) = load_config(&path).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(config.max_page_size, 5);
        assert_eq!(config.default_page_size, 5);
    }

    #[test]
    fn test_unparseable_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[listing\nmax_page_size = ").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::TomlParse { .. })));
    }
}
