//! Client Configuration
//!
//! The API base URL is resolved each time a request is built so a changed
//! override takes effect without reloading the page.

use std::time::Duration;

/// Fallback API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Local storage key for a user-supplied API base URL
pub const API_URL_STORAGE_KEY: &str = "eventhub_api_url";

/// Local storage key for the console log level
pub const LOG_LEVEL_STORAGE_KEY: &str = "eventhub_log_level";

/// How long the simulated profile save takes
pub const SIMULATED_SAVE_DELAY: Duration = Duration::from_millis(1000);

/// API base baked in at build time, if any
fn build_time_api_base() -> Option<&'static str> {
    option_env!("EVENTHUB_API_BASE_URL")
}

/// Read a value from browser local storage
pub fn stored_value(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

/// Get the API base URL: local storage override, then build-time env, then default
pub fn api_base() -> String {
    resolve_api_base(stored_value(API_URL_STORAGE_KEY).as_deref(), build_time_api_base())
}

/// Pick the first non-blank candidate and strip trailing slashes
fn resolve_api_base(stored: Option<&str>, build_time: Option<&str>) -> String {
    [stored, build_time]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}
