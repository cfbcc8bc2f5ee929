//! # emolens-pipeline
//!
//! Orchestrates one observation end to end:
//! perception output → fusion → the session's own history → adaptive state
//! → session timeline → persistence sink.

pub mod engine;
pub mod observation;

pub use engine::EmolensPipeline;
pub use observation::{Observation, ObservationOutcome};
