pub mod defaults;
mod history_config;
mod observability_config;
mod session_config;
mod state_config;

pub use history_config::HistoryConfig;
pub use observability_config::ObservabilityConfig;
pub use session_config::SessionConfig;
pub use state_config::StateConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{EmolensError, EmolensResult};

/// Top-level configuration. Every section falls back to its defaults, so an
/// empty document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmolensConfig {
    pub history: HistoryConfig,
    pub state: StateConfig,
    pub session: SessionConfig,
    pub observability: ObservabilityConfig,
}

impl EmolensConfig {
    /// Parse a TOML document. Missing sections and fields keep their defaults.
    pub fn from_toml(input: &str) -> EmolensResult<Self> {
        toml::from_str(input).map_err(|e| EmolensError::Config {
            reason: e.to_string(),
        })
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> EmolensResult<String> {
        toml::to_string(self).map_err(|e| EmolensError::Config {
            reason: e.to_string(),
        })
    }
}
