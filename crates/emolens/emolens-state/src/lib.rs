//! # emolens-state
//!
//! Adaptive state engine: turns a fused emotion vector plus a session's
//! trend signals into engagement, cognitive load, a predicted trajectory,
//! and a recommended teaching action.

pub mod action;
pub mod classify;
pub mod engine;
pub mod policy;

pub use action::{select_action, ActionDecision};
pub use classify::{classify_cognitive_load, classify_engagement, predict_trend};
pub use engine::AdaptiveStateEngine;
pub use policy::{pick_style, TeachingStyle};
