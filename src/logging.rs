// src/logging.rs

use crate::errors::{ConciergeError, ConciergeResult};
use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// Starts the file-backed logger. The terminal is in raw mode while the
/// widget runs, so `log` output must never reach stdout or stderr.
pub fn init_logging(level: &str) -> ConciergeResult<LoggerHandle> {
    Logger::try_with_env_or_str(level)
        .map_err(|e| ConciergeError::config_error(format!("Invalid log specification: {}", e)))?
        .log_to_file(FileSpec::default().basename("concierge").suppress_timestamp())
        .append()
        .start()
        .map_err(|e| ConciergeError::config_error(format!("Failed to start logger: {}", e)))
}
