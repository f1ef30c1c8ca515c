//! User endpoints
//!
//! POST is an idempotent upsert-by-email: an existing user comes back with
//! 200, a newly created one with 201. Users are never deleted.

use super::{bad_request, internal_error, not_found, ApiError, AppContext, EmailQuery};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use ecotrack_common::db;
use ecotrack_common::db::models::User;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
}

/// GET /users - Look up a user by email
pub async fn get_user(
    State(ctx): State<AppContext>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<User>, ApiError> {
    let email = match query.email.as_deref() {
        Some(email) if !email.is_empty() => email,
        _ => return Err(bad_request("Email is required")),
    };

    match db::users::get_user_by_email(&ctx.db_pool, email).await {
        Ok(Some(user)) => Ok(Json(user)),
        Ok(None) => Err(not_found("User not found")),
        Err(e) => Err(internal_error(&e)),
    }
}

/// POST /users - Create a user if the email is unknown
pub async fn create_user(
    State(ctx): State<AppContext>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let email = match req.email.as_deref() {
        Some(email) if !email.is_empty() => email,
        _ => return Err(bad_request("Email is required")),
    };

    // Check if user already exists
    match db::users::get_user_by_email(&ctx.db_pool, email).await {
        Ok(Some(existing)) => {
            info!("Returning existing user for {}", email);
            Ok((StatusCode::OK, Json(existing)))
        }
        Ok(None) => match db::users::insert_user(&ctx.db_pool, email).await {
            Ok(user) => {
                info!("Created new user for {}", email);
                Ok((StatusCode::CREATED, Json(user)))
            }
            Err(e) => Err(internal_error(&e)),
        },
        Err(e) => Err(internal_error(&e)),
    }
}
