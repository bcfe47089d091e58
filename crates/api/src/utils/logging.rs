use std::time::Duration;

use hubcard_domain::HubcardError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"profile::lookup_profile"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// The helper keeps the command wrappers concise and the log shape uniform.
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `HubcardError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &HubcardError) -> &'static str {
    match error {
        HubcardError::Database(_) => "database",
        HubcardError::Config(_) => "config",
        HubcardError::Network(_) => "network",
        HubcardError::NotFound(_) => "not_found",
        HubcardError::RateLimited(_) => "rate_limited",
        HubcardError::InvalidInput(_) => "invalid_input",
        HubcardError::Internal(_) => "internal",
    }
}
