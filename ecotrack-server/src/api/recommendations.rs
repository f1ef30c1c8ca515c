//! Recommendation endpoints
//!
//! POST runs the generator against an audit and persists the whole draft
//! catalog in one transaction. PUT only moves the completed flag, and only
//! forward: a completed recommendation stays completed.

use super::{bad_request, internal_error, not_found, resolve_user, ApiError, AppContext, EmailQuery};
use crate::engine::recommend::generate_recommendations as generate_drafts;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use ecotrack_common::db;
use ecotrack_common::db::models::Recommendation;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecommendationsRequest {
    pub audit_id: Option<i64>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRecommendationRequest {
    pub id: Option<i64>,
    pub completed: Option<bool>,
}

/// GET /recommendations - List a user's recommendations, most urgent first
pub async fn list_recommendations(
    State(ctx): State<AppContext>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<Recommendation>>, ApiError> {
    let user = resolve_user(&ctx.db_pool, query.email.as_deref()).await?;

    match db::recommendations::list_recommendations_for_user(&ctx.db_pool, &user.id).await {
        Ok(recommendations) => {
            info!(
                "Found {} recommendations for user {}",
                recommendations.len(),
                user.id
            );
            Ok(Json(recommendations))
        }
        Err(e) => Err(internal_error(&e)),
    }
}

/// POST /recommendations - Generate and persist recommendations for an audit
pub async fn generate_recommendations(
    State(ctx): State<AppContext>,
    Json(req): Json<GenerateRecommendationsRequest>,
) -> Result<(StatusCode, Json<Vec<Recommendation>>), ApiError> {
    let audit_id = match req.audit_id {
        Some(audit_id) => audit_id,
        None => return Err(bad_request("Audit ID and email are required")),
    };

    let user = resolve_user(&ctx.db_pool, req.email.as_deref()).await?;

    let audit = match db::audits::get_audit(&ctx.db_pool, audit_id).await {
        Ok(Some(audit)) => audit,
        Ok(None) => return Err(not_found("Audit not found")),
        Err(e) => return Err(internal_error(&e)),
    };

    let drafts = generate_drafts(&audit);
    info!("Generating {} recommendations for audit {}", drafts.len(), audit_id);

    match db::recommendations::insert_recommendations(&ctx.db_pool, audit_id, &user.id, &drafts)
        .await
    {
        Ok(created) => Ok((StatusCode::CREATED, Json(created))),
        Err(e) => Err(internal_error(&e)),
    }
}

/// PUT /recommendations - Update the completed flag of a recommendation
pub async fn update_recommendation(
    State(ctx): State<AppContext>,
    Json(req): Json<UpdateRecommendationRequest>,
) -> Result<Json<Recommendation>, ApiError> {
    let id = match req.id {
        Some(id) => id,
        None => return Err(bad_request("Recommendation ID is required")),
    };
    let completed = req.completed.unwrap_or(false);

    match db::recommendations::set_completed(&ctx.db_pool, id, completed).await {
        Ok(Some(updated)) => {
            info!("Recommendation {} updated, completed: {}", id, updated.completed);
            Ok(Json(updated))
        }
        Ok(None) => Err(not_found("Recommendation not found")),
        Err(e) => Err(internal_error(&e)),
    }
}
