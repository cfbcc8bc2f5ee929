//! # emolens-session
//!
//! Session-scoped state for the affect pipeline. Every learner gets an
//! isolated [`EmotionHistory`] inside a [`SessionContext`]; the
//! [`SessionManager`] maps session ids to contexts and serializes access to
//! each one.

pub mod cleanup;
pub mod context;
pub mod export;
pub mod history;
pub mod manager;

pub use cleanup::cleanup_stale_sessions;
pub use context::SessionContext;
pub use export::{export_timeline, timeline_file_name, write_timeline};
pub use history::{EmotionHistory, Sample};
pub use manager::SessionManager;
