//! exo Library
//!
//! Finds running JVM processes, shows how long they have been running and how
//! much memory they hold, and terminates the ones the operator picks.

pub mod commands;
pub mod config;
pub mod core;
pub mod error;
#[cfg(unix)]
pub mod platform;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::models::*;
pub use crate::core::pipeline::Pipeline;
pub use config::RunConfig;
pub use error::{ExoError, ExoResult};
