//! Domain engines
//!
//! Pure business logic with no I/O: audit scoring and recommendation
//! generation. Handlers call into these and persist the results.

pub mod recommend;
pub mod scoring;
