use serde::{Deserialize, Serialize};

use super::defaults;

/// Session registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Sessions idle longer than this are eligible for cleanup (seconds).
    pub max_idle_secs: u64,
    /// Directory timelines are written to when a session is exported.
    pub export_dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_idle_secs: defaults::DEFAULT_MAX_IDLE_SECS,
            export_dir: defaults::DEFAULT_EXPORT_DIR.to_string(),
        }
    }
}
