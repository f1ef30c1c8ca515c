//! Database models and queries

pub mod actions;
pub mod audits;
pub mod init;
pub mod models;
pub mod recommendations;
pub mod users;

pub use init::*;
pub use models::*;
