//! Structured logging setup for lintscribe
//!
//! Initializes a `tracing` subscriber that writes to stderr, leaving stdout
//! free for user-facing messages. Supports pretty and JSON output and honours
//! `RUST_LOG` when it is set.
//!
//! # Example
//!
//! ```no_run
//! use lintscribe::util::logging;
//!
//! logging::init_from_env();
//!
//! tracing::info!(file = "a.py", "Processing file");
//! ```

use crate::config::RuntimeSettings;
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Crate target used for the default filter directive
const CRATE_TARGET: &str = "lintscribe";

/// Noisy HTTP dependencies capped at WARN unless `RUST_LOG` says otherwise
const QUIET_TARGETS: &[&str] = &["h2", "hyper", "hyper_util", "reqwest", "genai"];

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,

    /// Include the module target (e.g., lintscribe::pipeline) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Builds the configuration used by the command line
    ///
    /// Precedence: explicit `--log-level`, then `--verbose` (debug), then
    /// `--quiet` (error), then `LINTSCRIBE_LOG_LEVEL`.
    pub fn for_cli(
        log_level: Option<&str>,
        verbose: bool,
        quiet: bool,
        settings: &RuntimeSettings,
    ) -> Self {
        let level = if let Some(level_str) = log_level {
            parse_level(level_str)
        } else if verbose {
            Level::DEBUG
        } else if quiet {
            Level::ERROR
        } else {
            parse_level(&settings.log_level)
        };

        Self {
            level,
            use_json: settings.log_json,
            include_location: verbose,
            ..Default::default()
        }
    }
}

/// Parses a log level, falling back to INFO for unknown values
///
/// ```
/// use lintscribe::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("INFO"), Level::INFO);
/// assert_eq!(parse_level("invalid"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

fn build_filter(level: Level) -> EnvFilter {
    if env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }

    let mut filter = EnvFilter::new("warn");
    let directives = std::iter::once(format!("{}={}", CRATE_TARGET, level))
        .chain(QUIET_TARGETS.iter().map(|target| format!("{}=warn", target)));
    for directive in directives {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Installs the global subscriber; later calls are ignored
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config.level);

        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.include_target)
            .with_file(config.include_location)
            .with_line_number(config.include_location);

        let registry = tracing_subscriber::registry().with(filter);
        let result = if config.use_json {
            registry.with(layer.json()).try_init()
        } else {
            registry.with(layer).try_init()
        };

        if let Err(e) = result {
            eprintln!("Failed to initialize logging: {}", e);
        }
    });
}

/// Initializes logging from `LINTSCRIBE_LOG_LEVEL` and `LINTSCRIBE_LOG_JSON`
pub fn init_from_env() {
    let settings = RuntimeSettings::default();
    init_logging(LoggingConfig {
        level: parse_level(&settings.log_level),
        use_json: settings.log_json,
        ..Default::default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(level: &str) -> RuntimeSettings {
        RuntimeSettings {
            linter: "pylint".to_string(),
            api_key: None,
            api_base_url: None,
            log_level: level.to_string(),
            log_json: false,
        }
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("info"), Level::INFO);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
    }

    #[test]
    fn test_parse_level_case_insensitive() {
        assert_eq!(parse_level("TRACE"), Level::TRACE);
        assert_eq!(parse_level("Debug"), Level::DEBUG);
    }

    #[test]
    fn test_parse_level_invalid() {
        assert_eq!(parse_level("invalid"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.use_json);
        assert!(config.include_target);
        assert!(!config.include_location);
    }

    #[test]
    fn test_cli_level_precedence() {
        let env_warn = settings("warn");

        let explicit = LoggingConfig::for_cli(Some("trace"), true, false, &env_warn);
        assert_eq!(explicit.level, Level::TRACE);

        let verbose = LoggingConfig::for_cli(None, true, false, &env_warn);
        assert_eq!(verbose.level, Level::DEBUG);
        assert!(verbose.include_location);

        let quiet = LoggingConfig::for_cli(None, false, true, &env_warn);
        assert_eq!(quiet.level, Level::ERROR);

        let from_env = LoggingConfig::for_cli(None, false, false, &env_warn);
        assert_eq!(from_env.level, Level::WARN);
    }

    #[test]
    fn test_with_level() {
        let config = LoggingConfig::with_level(Level::DEBUG);
        assert_eq!(config.level, Level::DEBUG);
        assert!(!config.use_json);
    }
}
