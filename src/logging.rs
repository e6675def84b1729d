//! Browser logging.
//!
//! Routes `tracing` events to the browser console.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

use crate::config::{stored_value, LOG_LEVEL_STORAGE_KEY};

/// Install the console subscriber and panic hook. Safe to call more than once.
pub fn init() {
    console_error_panic_hook::set_once();

    let level = stored_value(LOG_LEVEL_STORAGE_KEY)
        .and_then(|value| parse_level(&value))
        .unwrap_or(LevelFilter::WARN);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    // A second init returns Err; the first subscriber stays in place.
    let _ = tracing_subscriber::registry()
        .with(level)
        .with(fmt_layer)
        .try_init();
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}
