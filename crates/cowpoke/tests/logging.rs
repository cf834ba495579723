//! Tests for logging functionality

use cowpoke::core::logging::{init_logging, LogFormat};
use cowpoke::render_bubble;
use std::str::FromStr;
use tracing_subscriber::util::SubscriberInitExt;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("Pretty").unwrap(), LogFormat::Pretty);
    assert!(LogFormat::from_str("invalid").is_err());
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("invalid_format"));
    assert!(result.is_err());
}

#[test]
fn test_init_logging_tolerates_repeat_calls() {
    // Only the first global init can succeed; later ones must not panic
    let _ = init_logging(Some("debug"), Some("compact"));
    let _ = init_logging(Some("trace"), Some("json"));
    let _ = init_logging(Some("not a level"), Some("pretty"));
}

#[test]
fn test_render_under_trace_subscriber() {
    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .set_default();

    let bubble = render_bubble("Logging should not change output", 42);
    assert_eq!(bubble.lines().nth(1), Some("< Logging should not change output >"));
}
