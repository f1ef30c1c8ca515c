//! Action endpoints
//!
//! POST records that a recommendation was implemented. The referenced
//! recommendation must exist and belong to the requesting user; the action
//! insert and the completed-flag update commit in one transaction.

use super::{bad_request, forbidden, internal_error, not_found, resolve_user, ApiError, AppContext, EmailQuery};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use ecotrack_common::db;
use ecotrack_common::db::actions::NewAction;
use ecotrack_common::db::models::Action;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActionRequest {
    pub email: Option<String>,
    pub recommendation_id: Option<i64>,
    pub implementation_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub actual_savings_dollars: Option<i64>,
    pub actual_savings_kwh: Option<i64>,
}

/// GET /actions - List a user's actions, ordered by implementation date
pub async fn list_actions(
    State(ctx): State<AppContext>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<Action>>, ApiError> {
    let user = resolve_user(&ctx.db_pool, query.email.as_deref()).await?;

    match db::actions::list_actions_for_user(&ctx.db_pool, &user.id).await {
        Ok(actions) => {
            info!("Found {} actions for user {}", actions.len(), user.id);
            Ok(Json(actions))
        }
        Err(e) => Err(internal_error(&e)),
    }
}

/// POST /actions - Record an implemented recommendation
pub async fn create_action(
    State(ctx): State<AppContext>,
    Json(req): Json<CreateActionRequest>,
) -> Result<(StatusCode, Json<Action>), ApiError> {
    let recommendation_id = match req.recommendation_id {
        Some(id) => id,
        None => return Err(bad_request("Email and recommendation ID are required")),
    };

    let user = resolve_user(&ctx.db_pool, req.email.as_deref()).await?;

    // Verify recommendation exists and belongs to this user
    let recommendation =
        match db::recommendations::get_recommendation(&ctx.db_pool, recommendation_id).await {
            Ok(Some(recommendation)) => recommendation,
            Ok(None) => return Err(not_found("Recommendation not found")),
            Err(e) => return Err(internal_error(&e)),
        };

    if recommendation.user_id != user.id {
        return Err(forbidden("Recommendation does not belong to this user"));
    }

    let new_action = NewAction {
        user_id: user.id,
        recommendation_id,
        implementation_date: req.implementation_date,
        notes: req.notes,
        actual_savings_dollars: req.actual_savings_dollars,
        actual_savings_kwh: req.actual_savings_kwh,
    };

    match db::actions::insert_action(&ctx.db_pool, new_action).await {
        Ok(action) => {
            info!("New action created: {}", action.id);
            Ok((StatusCode::CREATED, Json(action)))
        }
        Err(e) => Err(internal_error(&e)),
    }
}
