//! Span definitions per pipeline stage: fusion and state analysis.

/// Create a fusion span.
#[macro_export]
macro_rules! fusion_span {
    ($session_id:expr) => {
        tracing::info_span!("emolens.fusion", session_id = %$session_id)
    };
}

/// Create a state analysis span.
#[macro_export]
macro_rules! analysis_span {
    ($session_id:expr, $history_len:expr) => {
        tracing::info_span!(
            "emolens.analysis",
            session_id = %$session_id,
            history_len = $history_len
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const FUSION: &str = "emolens.fusion";
    pub const ANALYSIS: &str = "emolens.analysis";
}
