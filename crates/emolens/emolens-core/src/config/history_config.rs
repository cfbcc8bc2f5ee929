use serde::{Deserialize, Serialize};

use super::defaults;

/// History tracker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Sliding window capacity (number of retained observations).
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::DEFAULT_HISTORY_CAPACITY,
        }
    }
}
