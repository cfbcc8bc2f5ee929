//! Removal of sessions that have gone quiet.

use crate::manager::SessionManager;

/// Remove every session idle for longer than `max_idle`. Returns the count removed.
pub fn cleanup_stale_sessions(manager: &SessionManager, max_idle: chrono::Duration) -> usize {
    let removed = manager.retain_sessions(|ctx| ctx.idle_duration() <= max_idle);
    if removed > 0 {
        tracing::info!(
            event = "sessions_cleaned",
            removed = removed,
            remaining = manager.session_count(),
            "stale sessions removed"
        );
    }
    removed
}
