use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "tincture_palette=debug"). When neither it nor `RUST_LOG` is set, records
/// at `default_level` and above are shown.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Only warnings and errors unless a filter says otherwise.
    pub fn quiet(mut self) -> Self {
        self.default_level = LevelFilter::Warn;
        self
    }
}

/// Where the active filter came from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterSource {
    Config(String),
    Env(String),
    Level(LevelFilter),
}

fn resolve_filter(config: &LoggingConfig, env: Option<String>) -> FilterSource {
    match (&config.env_filter, env) {
        (Some(filter), _) => FilterSource::Config(filter.clone()),
        (None, Some(filter)) if !filter.trim().is_empty() => FilterSource::Env(filter),
        _ => FilterSource::Level(config.default_level),
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then
/// `config.default_level`. Subsequent calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        let source = resolve_filter(&config, std::env::var("RUST_LOG").ok());
        match &source {
            FilterSource::Config(filter) | FilterSource::Env(filter) => {
                builder.parse_filters(filter);
            }
            FilterSource::Level(level) => {
                builder.filter_level(*level);
            }
        }

        builder.write_style(config.write_style);

        // A test harness or embedding app may already own the logger.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized ({source:?})");
    });
}
