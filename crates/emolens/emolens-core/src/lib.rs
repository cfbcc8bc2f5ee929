//! # emolens-core
//!
//! Foundation crate for the EmoLens affect pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EmolensConfig;
pub use errors::{EmolensError, EmolensResult};
pub use models::{
    AdaptiveState, CognitiveLoad, EngagementLevel, Modality, ModalityEstimate, PredictedState,
    RecommendedAction, SessionEvent, UnifiedEmotionVector,
};
