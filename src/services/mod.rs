// src/services/mod.rs

//! Services for talking to the support platform.

mod interactions;

pub use interactions::{FetchOutcome, InteractionFetcher};
