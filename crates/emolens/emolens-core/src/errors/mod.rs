mod session_error;

pub use session_error::SessionError;

/// Top-level error for the EmoLens pipeline.
///
/// Missing or malformed modality input is never an error; it is absorbed by
/// the fusion and state engines. These variants cover registry misuse,
/// configuration, and persistence only.
#[derive(Debug, thiserror::Error)]
pub enum EmolensError {
    #[error(transparent)]
    SessionError(#[from] SessionError),

    #[error("invalid configuration: {reason}")]
    Config { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("event sink failed: {reason}")]
    SinkFailed { reason: String },
}

pub type EmolensResult<T> = Result<T, EmolensError>;
