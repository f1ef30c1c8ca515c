//! # EcoTrack Server (ecotrack-server)
//!
//! HTTP service for the EcoTrack home-energy-audit application.
//!
//! **Purpose:** Accept audit submissions, compute energy efficiency scores,
//! generate efficiency recommendations, and track implemented actions over
//! a SQLite store.

pub mod api;
pub mod engine;
