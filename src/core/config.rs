use std::env;
use std::time::Duration;

/// Address the server listens on when `--http` is not given
pub const DEFAULT_HTTP_ADDR: &str = "localhost:9999";

/// Name of the installed executable, used when searching `$PATH`
pub const BIN_NAME: &str = "notifyserver";

const DEFAULT_NOTIFIER_PATH: &str = "terminal-notifier";
const DEFAULT_DELIVERY_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct AppConfig {
    // Program that hands notifications to the OS notification center
    pub notifier_path: String,
    // Upper bound on a single delivery before the request fails
    pub delivery_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            notifier_path: parse_notifier_path(env::var("NOTIFYSERVER_NOTIFIER_PATH").ok()),
            delivery_timeout: parse_timeout(env::var("NOTIFYSERVER_DELIVERY_TIMEOUT_SECS").ok()),
        }
    }
}

fn parse_notifier_path(value: Option<String>) -> String {
    value
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| DEFAULT_NOTIFIER_PATH.to_string())
}

// Whole seconds. Zero or anything unparseable falls back to the
// default since a zero timeout would fail every delivery.
fn parse_timeout(value: Option<String>) -> Duration {
    let secs = value
        .and_then(|secs| secs.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_DELIVERY_TIMEOUT_SECS);
    Duration::from_secs(secs)
}
