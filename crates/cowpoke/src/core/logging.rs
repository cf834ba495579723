//! Logging infrastructure
//!
//! Structured logging through the `tracing` crate. The library only emits
//! events; binaries and tests decide whether and how to print them by calling
//! [`init_logging`].
//!
//! # Log Formats
//!
//! - `compact`: Single-line format, good for production
//! - `pretty`: Multi-line format with colors, good for development
//! - `json`: JSON format, good for log aggregation systems
//!
//! # Environment Variables
//!
//! - `COWPOKE_LOG_LEVEL`: Set log level (trace|debug|info|warn|error|off)
//! - `RUST_LOG`: Alternative way to set log level (tracing-subscriber standard)
//! - `COWPOKE_LOG_FORMAT`: Set log format (compact|pretty|json)
//!
//! # Filtering Logs
//!
//! ```bash
//! # Show wrapping decisions while leaving everything else at info
//! RUST_LOG="info,cowpoke::core::bubble=trace" cowpoke say "Howdy"
//! ```
//!
//! On `wasm32` the subscriber is `tracing-wasm`, which logs to the browser
//! console and ignores the format argument.

use std::str::FromStr;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

#[cfg(target_arch = "wasm32")]
use tracing_subscriber::{layer::SubscriberExt, Registry};
#[cfg(target_arch = "wasm32")]
use tracing_wasm::{WASMLayer, WASMLayerConfig};

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

/// Initialize the tracing subscriber with the given log level and format
///
/// * `level` - log level or filter directive. If None, uses `COWPOKE_LOG_LEVEL`
///   or `RUST_LOG`, or defaults to `warn`.
/// * `format` - compact|pretty|json. If None, uses `COWPOKE_LOG_FORMAT`, or
///   defaults to `compact`.
///
/// Returns an error for an unknown format or when a global subscriber is
/// already installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = (level, format);
        let subscriber = Registry::default().with(WASMLayer::new(WASMLayerConfig::default()));
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let log_level = level
            .map(|s| s.to_string())
            .or_else(|| std::env::var("COWPOKE_LOG_LEVEL").ok())
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| "warn".to_string());

        let log_format = format
            .map(|s| s.to_string())
            .or_else(|| std::env::var("COWPOKE_LOG_FORMAT").ok())
            .unwrap_or_else(|| "compact".to_string());

        let filter = if log_level == "off" {
            EnvFilter::new("off")
        } else {
            EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        let format = LogFormat::from_str(&log_format)
            .map_err(|e| format!("Invalid log format: {}", e))?;

        // Logs go to stderr so rendered output on stdout stays clean
        match format {
            LogFormat::Compact => {
                Registry::default()
                    .with(filter)
                    .with(
                        fmt::Layer::default()
                            .with_writer(std::io::stderr)
                            .with_target(false)
                            .with_level(true)
                            .with_file(false)
                            .with_line_number(false)
                            .with_span_events(FmtSpan::NONE),
                    )
                    .try_init()?;
            }
            LogFormat::Pretty => {
                Registry::default()
                    .with(filter)
                    .with(
                        fmt::Layer::default()
                            .with_writer(std::io::stderr)
                            .with_target(true)
                            .with_level(true)
                            .with_file(true)
                            .with_line_number(true)
                            .with_span_events(FmtSpan::ACTIVE)
                            .pretty(),
                    )
                    .try_init()?;
            }
            LogFormat::Json => {
                Registry::default()
                    .with(filter)
                    .with(
                        fmt::Layer::default()
                            .with_writer(std::io::stderr)
                            .with_target(true)
                            .with_level(true)
                            .with_span_events(FmtSpan::CLOSE)
                            .json(),
                    )
                    .try_init()?;
            }
        }

        Ok(())
    }
}
