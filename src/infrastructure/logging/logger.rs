use std::io;

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::domain::models::{LogFormat, LoggingConfig};

/// Logger implementation using tracing
#[derive(Debug)]
pub struct LoggerImpl {
    level: Level,
    format: LogFormat,
}

impl LoggerImpl {
    /// Install a global subscriber writing to stderr
    ///
    /// `RUST_LOG` directives take precedence over `config.level`.
    ///
    /// # Errors
    /// Returns an error if the level is invalid or a global subscriber is
    /// already installed
    pub fn init(config: &LoggingConfig) -> Result<Self> {
        let level = parse_log_level(&config.level)?;

        let env_filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();

        match config.format {
            LogFormat::Json => {
                let stderr_layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(env_filter);

                tracing_subscriber::registry()
                    .with(stderr_layer)
                    .try_init()?;
            }
            LogFormat::Pretty => {
                let stderr_layer = tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_filter(env_filter);

                tracing_subscriber::registry()
                    .with(stderr_layer)
                    .try_init()?;
            }
        }

        tracing::info!(
            level = %config.level,
            format = ?config.format,
            "logger initialized"
        );

        Ok(Self {
            level,
            format: config.format,
        })
    }

    pub const fn level(&self) -> Level {
        self.level
    }

    pub const fn format(&self) -> LogFormat {
        self.format
    }
}

/// Parse log level string to Level
pub(crate) fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!("Invalid log level: {level}"),
    }
}
