// src/lib.rs

//! Support Interaction Labeler Library

pub mod classify;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
