use std::sync::Once;

use clap::ValueEnum;
use env_logger::WriteStyle;

/// When log lines on stderr get ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogColor {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<LogColor> for WriteStyle {
    fn from(color: LogColor) -> Self {
        match color {
            LogColor::Auto => WriteStyle::Auto,
            LogColor::Always => WriteStyle::Always,
            LogColor::Never => WriteStyle::Never,
        }
    }
}

/// Logger settings assembled from command-line flags.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "debug",
/// "gauss_gradient=trace"). When unset, `RUST_LOG` is consulted, then `warn`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub color: LogColor,
}

impl LoggingConfig {
    /// `--verbose` forces `debug` regardless of `RUST_LOG`.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.env_filter = Some("debug".to_string());
        }
        self
    }

    pub fn with_color(mut self, color: LogColor) -> Self {
        self.color = color;
        self
    }

    fn filter(&self) -> Option<String> {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.filter() {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Warn);
            }
        }

        // Gradient text owns stdout.
        builder
            .target(env_logger::Target::Stderr)
            .write_style(config.color.into())
            .init();

        log::debug!("logging initialized ({:?} color)", config.color);
    });
}
