//! Profile lookup commands
//!
//! Thin wrappers that validate input, bridge progress events to a view, and
//! record structured execution logs around the core lookup service.

use std::sync::Arc;
use std::time::Instant;

use hubcard_domain::{HubcardError, ProfileRecord, Result as DomainResult};
use tracing::info;

use crate::context::AppContext;
use crate::utils::logging::{error_label, log_command_execution};
use crate::view::ProfileView;

/// Look up a username, rendering progress and the final record to `view`.
///
/// Lookup-level failures (unknown user, rate limit, network trouble) come
/// back as a record with `error = true`; `Err` is reserved for invalid input
/// and internal failures.
pub async fn lookup_profile(
    ctx: &Arc<AppContext>,
    view: &dyn ProfileView,
    username: &str,
) -> DomainResult<ProfileRecord> {
    let command_name = "profile::lookup_profile";
    let start = Instant::now();

    let username = username.trim();
    if username.is_empty() {
        return Err(HubcardError::InvalidInput("username must not be empty".into()));
    }

    info!(command = command_name, username, "Executing lookup_profile");

    let callback = |record: &ProfileRecord, progress: u8, next: Option<u8>| {
        view.render(record, progress, next);
    };
    let result = ctx.lookup_service.lookup(username, &callback).await;

    let success = matches!(&result, Ok(record) if !record.error);
    log_command_execution(command_name, start.elapsed(), success);
    if let Err(err) = &result {
        info!(command = command_name, error = error_label(err), "lookup_profile failed");
    }

    result
}

/// Drop the cached record for a username, if any.
pub async fn forget_profile(ctx: &Arc<AppContext>, username: &str) -> DomainResult<()> {
    let command_name = "profile::forget_profile";
    let start = Instant::now();

    let username = username.trim();
    if username.is_empty() {
        return Err(HubcardError::InvalidInput("username must not be empty".into()));
    }

    info!(command = command_name, username, "Executing forget_profile");

    let result = ctx.profile_cache.delete(username).await;
    log_command_execution(command_name, start.elapsed(), result.is_ok());

    result
}
