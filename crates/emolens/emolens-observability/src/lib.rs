//! # emolens-observability
//!
//! Structured logging for the affect pipeline: subscriber setup, span
//! macros, and one function per significant event.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
