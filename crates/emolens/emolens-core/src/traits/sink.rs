use crate::errors::EmolensResult;
use crate::models::SessionEvent;

/// Persistence collaborator receiving every recorded timeline event.
///
/// Called in timeline order while the session entry is held, so an
/// implementation must not call back into the same session.
pub trait IEventSink: Send + Sync {
    fn record(&self, session_id: &str, event: &SessionEvent) -> EmolensResult<()>;
}
