use std::error::Error;
use tracing::Level;

pub const LOG_LEVEL_VAR: &str = "BOOKLIST_LOG_LEVEL";

/// Maximum log level named by `BOOKLIST_LOG_LEVEL` (`error` to `trace`,
/// any case). Unset or unknown values log at INFO.
pub fn log_level(raw: Option<String>) -> Level {
    raw.and_then(|raw| raw.trim().parse::<Level>().ok()).unwrap_or(Level::INFO)
}

// one JSON object per event with fields flattened next to the message, no
// module targets or color codes
pub fn setup_tracing(max_level: Level) -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .with_ansi(false)
        .json()
        .flatten_event(true)
        .try_init()
}
