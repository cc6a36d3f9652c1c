// src/models/mod.rs

//! Domain models for the labeler application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod interaction;
mod stats;

// Re-export all public types
pub use config::{Config, LoggingConfig, PlatformConfig};
pub use interaction::Interaction;
pub use stats::{FetchStats, LabelStats};
