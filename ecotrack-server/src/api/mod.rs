//! HTTP API
//!
//! Axum handlers for the four entity endpoints plus health, and the shared
//! error-to-status conversion. Every entity handler resolves the requesting
//! user by email before any entity-specific work.

pub mod actions;
pub mod audits;
pub mod recommendations;
pub mod server;
pub mod users;

pub use server::{create_router, AppContext};

use axum::{http::StatusCode, Json};
use ecotrack_common::db::models::User;
use ecotrack_common::{db, Error};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::error;

/// JSON error body returned by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handler-level error: status code plus JSON body
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Query parameters identifying the requesting user
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

pub(crate) fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

pub(crate) fn not_found(message: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

pub(crate) fn forbidden(message: &str) -> ApiError {
    (
        StatusCode::FORBIDDEN,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// Convert an unexpected failure into a generic 500
///
/// The cause is logged; the response body stays generic.
pub(crate) fn internal_error(err: &Error) -> ApiError {
    error!("API error: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal Server Error".to_string(),
        }),
    )
}

/// Resolve the requesting user by email
///
/// 400 when the email is missing, 404 when no user matches.
pub(crate) async fn resolve_user(
    pool: &SqlitePool,
    email: Option<&str>,
) -> Result<User, ApiError> {
    let email = match email {
        Some(email) if !email.is_empty() => email,
        _ => return Err(bad_request("Email is required")),
    };

    match db::users::get_user_by_email(pool, email).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(not_found("User not found")),
        Err(e) => Err(internal_error(&e)),
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    module: String,
    version: String,
}

/// GET /health - Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        module: "ecotrack".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
