/// Session registry errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session not found: {session_id}")]
    NotFound { session_id: String },

    #[error("session already exists: {session_id}")]
    AlreadyExists { session_id: String },

    #[error("history belongs to session {actual}, not {expected}")]
    HistoryOwnerMismatch { expected: String, actual: String },
}
