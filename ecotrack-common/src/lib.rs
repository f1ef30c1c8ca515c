//! # EcoTrack Common Library
//!
//! Shared code for the EcoTrack service including:
//! - Database initialization, models, and queries
//! - Common error types
//! - Configuration and data folder resolution

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
