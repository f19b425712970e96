// LogPager - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr, so stdout carries only command results.

use super::constants;
use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(rust_log.as_deref(), debug_flag, config_level);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();

    tracing::debug!(
        app = constants::APP_NAME,
        version = constants::APP_VERSION,
        directive,
        "Logging initialised"
    );
}

/// Pick the filter directive by priority. An empty `RUST_LOG` counts as unset.
fn filter_directive<'a>(
    rust_log: Option<&'a str>,
    debug_flag: bool,
    config_level: Option<&'a str>,
) -> &'a str {
    match rust_log.map(str::trim).filter(|v| !v.is_empty()) {
        Some(env) => env,
        None if debug_flag => "debug",
        None => config_level.unwrap_or(constants::DEFAULT_LOG_LEVEL),
    }
}
