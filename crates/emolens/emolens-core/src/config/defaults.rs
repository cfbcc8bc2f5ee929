// Single source of truth for all default values.

// --- History ---
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

// --- Engagement (valence) ---
pub const DEFAULT_HIGH_ENGAGEMENT_VALENCE: f64 = 0.5;
pub const DEFAULT_LOW_ENGAGEMENT_VALENCE: f64 = -0.3;

// --- Cognitive load (arousal) ---
pub const DEFAULT_LOW_LOAD_AROUSAL: f64 = 0.25;
pub const DEFAULT_HIGH_LOAD_AROUSAL: f64 = 0.55;

// --- Trend ---
pub const DEFAULT_FRUSTRATION_MOMENTUM: f64 = -0.03;
pub const DEFAULT_FRUSTRATION_AROUSAL_TREND: f64 = 0.03;
pub const DEFAULT_IMPROVING_MOMENTUM: f64 = 0.04;
pub const DEFAULT_DISTRESS_EMOTIONS: [&str; 3] = ["anger", "fear", "sadness"];

// --- Session ---
pub const DEFAULT_MAX_IDLE_SECS: u64 = 3600; // 1 hour
pub const DEFAULT_EXPORT_DIR: &str = ".";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
