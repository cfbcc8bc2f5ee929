/// EmoLens system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Valence range lower bound.
pub const VALENCE_MIN: f64 = -1.0;
/// Valence range upper bound.
pub const VALENCE_MAX: f64 = 1.0;

/// Arousal and confidence share the unit interval.
pub const UNIT_MIN: f64 = 0.0;
pub const UNIT_MAX: f64 = 1.0;

/// Prompt shown before any modality has produced an estimate.
pub const AWAITING_INPUT_PROMPT: &str = "Start whenever you're ready!";
