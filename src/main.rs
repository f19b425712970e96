// LogPager - main.rs
//
// Command-line entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading (config.toml, --config, --dir)
// 3. Logging initialisation (debug mode support)
// 4. Dispatch to the listing service and output writers

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use logpager::app::listing::LogFileService;
use logpager::core::export;
use logpager::core::model::{ByteSizeRange, DateRange, FilterCriteria, LogLevel};
use logpager::core::pagination::PageRequest;
use logpager::platform::config::{self, AppConfig, PlatformPaths};
use logpager::util;
use logpager::util::error::{ExportError, LogPagerError};
use std::io::Write;
use std::path::PathBuf;

/// LogPager - list, filter and page through an application's log files.
#[derive(Parser, Debug)]
#[command(name = "logpager", version, about)]
struct Cli {
    /// Log directory (overrides [logs] directory from the config file).
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Config file to load instead of the platform default.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List log file metadata, optionally filtered, one page at a time.
    List(ListArgs),

    /// Print the content of one log file.
    View {
        filename: String,
    },

    /// Print the absolute path of one log file, for download.
    Path {
        filename: String,
    },
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Case-insensitive filename substring.
    #[arg(long)]
    name: Option<String>,

    /// Case-insensitive substring of any line of content.
    #[arg(long)]
    content: Option<String>,

    /// Minimum file size in bytes (inclusive).
    #[arg(long)]
    min_size: Option<u64>,

    /// Maximum file size in bytes (inclusive).
    #[arg(long)]
    max_size: Option<u64>,

    /// Earliest last-modified time, local (YYYY-MM-DD[THH:MM:SS]).
    #[arg(long, value_parser = parse_since)]
    since: Option<NaiveDateTime>,

    /// Latest last-modified time, local (YYYY-MM-DD[THH:MM:SS]).
    /// A bare date covers that whole day.
    #[arg(long, value_parser = parse_until)]
    until: Option<NaiveDateTime>,

    /// Log level whose name must appear in the content (e.g. ERROR).
    #[arg(long)]
    level: Option<LogLevel>,

    /// JSON file holding the filter criteria instead of the flags above.
    #[arg(
        long,
        conflicts_with_all = ["name", "content", "min_size", "max_size", "since", "until", "level"]
    )]
    filter: Option<PathBuf>,

    /// Zero-based page index.
    #[arg(long, default_value_t = util::constants::DEFAULT_PAGE)]
    page: usize,

    /// Page size (defaults to [listing] default_page_size).
    #[arg(long)]
    size: Option<usize>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

fn main() {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PlatformPaths::resolve().config_file);

    let (mut app_config, config_warnings) = match config::load_config(&config_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    if let Some(ref dir) = cli.dir {
        app_config.log_dir = dir.clone();
    }

    tracing::debug!(
        version = util::constants::APP_VERSION,
        log_dir = %app_config.log_dir.display(),
        "LogPager starting"
    );

    if let Err(e) = run(cli.command, &app_config) {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command, app_config: &AppConfig) -> Result<(), LogPagerError> {
    let service = LogFileService::new(&app_config.log_dir);
    let stdout = std::io::stdout();

    match command {
        Command::List(args) => {
            let criteria = build_criteria(&args)?;
            let request = PageRequest::new(
                args.page,
                args.size.unwrap_or(app_config.default_page_size),
                app_config.max_page_size,
            )?;

            let page = service.list_log_files(criteria.as_ref(), request)?;
            tracing::info!(
                total = page.total_elements,
                page = page.current_page,
                pages = page.total_pages,
                "Listed log files"
            );

            match args.format {
                OutputFormat::Json => export::write_json(&page, stdout.lock())?,
                OutputFormat::Csv => {
                    export::write_csv(&page.items, stdout.lock())?;
                }
            }
        }
        Command::View { filename } => {
            let content = service.read_log_file(&filename)?;
            stdout
                .lock()
                .write_all(content.as_bytes())
                .map_err(ExportError::Io)?;
        }
        Command::Path { filename } => {
            let path = service.log_file_path(&filename)?;
            let path = path.canonicalize().unwrap_or(path);
            writeln!(stdout.lock(), "{}", path.display()).map_err(ExportError::Io)?;
        }
    }

    Ok(())
}

/// Build filter criteria from the flags or the `--filter` JSON file.
///
/// Returns `None` when no criterion was given. A half-open size or date
/// bound is completed with the widest possible opposite bound.
fn build_criteria(args: &ListArgs) -> Result<Option<FilterCriteria>, LogPagerError> {
    if let Some(ref path) = args.filter {
        let content = std::fs::read_to_string(path).map_err(|source| LogPagerError::Io {
            path: path.clone(),
            operation: "read filter criteria",
            source,
        })?;
        let criteria: FilterCriteria =
            serde_json::from_str(&content).map_err(|source| LogPagerError::Criteria {
                path: path.clone(),
                source,
            })?;
        return Ok(Some(criteria));
    }

    let byte_size_range = match (args.min_size, args.max_size) {
        (None, None) => None,
        (min, max) => Some(ByteSizeRange::new(min.unwrap_or(0), max.unwrap_or(u64::MAX))?),
    };

    let date_range = match (args.since, args.until) {
        (None, None) => None,
        (since, until) => Some(DateRange::new(
            since.unwrap_or(NaiveDateTime::MIN),
            until.unwrap_or(NaiveDateTime::MAX),
        )?),
    };

    let criteria = FilterCriteria {
        file_name_query: args.name.clone(),
        file_content_query: args.content.clone(),
        byte_size_range,
        date_range,
        log_level: args.level,
    };

    Ok((!criteria.is_empty()).then_some(criteria))
}

fn parse_since(s: &str) -> Result<NaiveDateTime, String> {
    parse_local_datetime(s, NaiveTime::MIN)
}

fn parse_until(s: &str) -> Result<NaiveDateTime, String> {
    let end_of_day = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN);
    parse_local_datetime(s, end_of_day)
}

/// Accepts `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS`, or a bare
/// `YYYY-MM-DD` completed with `date_only_time`.
fn parse_local_datetime(s: &str, date_only_time: NaiveTime) -> Result<NaiveDateTime, String> {
    let s = s.trim();
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|date| date.and_time(date_only_time))
        .map_err(|_| format!("'{s}' is not a date (YYYY-MM-DD) or date-time (YYYY-MM-DDTHH:MM:SS)"))
}
