//! # emolens-fusion
//!
//! Combines zero to three independently produced modality estimates into a
//! single [`UnifiedEmotionVector`](emolens_core::UnifiedEmotionVector).
//!
//! Malformed or missing modalities never surface as errors: they are coerced
//! or dropped, and fusion proceeds from whatever remains.

pub mod engine;
pub mod validation;

pub use engine::{fuse, FusionEngine};
pub use validation::{estimate_from_value, fuse_values};
