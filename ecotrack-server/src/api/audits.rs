//! Audit endpoints
//!
//! POST validates the required fields, resolves the user, computes the
//! energy score, and persists the audit. Audits are immutable once created.

use super::{bad_request, internal_error, resolve_user, ApiError, AppContext, EmailQuery};
use crate::engine::scoring::compute_energy_score;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use ecotrack_common::db;
use ecotrack_common::db::audits::NewAudit;
use ecotrack_common::db::models::{ApplianceData, Audit};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuditRequest {
    pub email: Option<String>,
    pub housing_type: Option<String>,
    pub house_size: Option<i64>,
    pub insulation_type: Option<String>,
    pub heating_system: Option<String>,
    pub cooling_system: Option<String>,
    pub appliance_data: Option<ApplianceData>,
    pub current_energy_bill: Option<i64>,
}

/// GET /audits - List a user's audits, oldest first
pub async fn list_audits(
    State(ctx): State<AppContext>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<Audit>>, ApiError> {
    let user = resolve_user(&ctx.db_pool, query.email.as_deref()).await?;

    match db::audits::list_audits_for_user(&ctx.db_pool, &user.id).await {
        Ok(audits) => {
            info!("Found {} audits for user {}", audits.len(), user.id);
            Ok(Json(audits))
        }
        Err(e) => Err(internal_error(&e)),
    }
}

/// POST /audits - Create a new audit with a computed energy score
pub async fn create_audit(
    State(ctx): State<AppContext>,
    Json(req): Json<CreateAuditRequest>,
) -> Result<(StatusCode, Json<Audit>), ApiError> {
    let housing_type = match req.housing_type {
        Some(housing_type) if !housing_type.is_empty() => housing_type,
        _ => return Err(bad_request("Email, housing type, and house size are required")),
    };
    let house_size = match req.house_size {
        Some(size) if size > 0 => size,
        _ => return Err(bad_request("Email, housing type, and house size are required")),
    };

    let user = resolve_user(&ctx.db_pool, req.email.as_deref()).await?;

    let energy_score =
        compute_energy_score(&housing_type, house_size, req.insulation_type.as_deref());
    info!("Calculated energy score: {}", energy_score);

    let new_audit = NewAudit {
        user_id: user.id,
        housing_type,
        house_size,
        insulation_type: req.insulation_type,
        heating_system: req.heating_system,
        cooling_system: req.cooling_system,
        appliance_data: req.appliance_data,
        current_energy_bill: req.current_energy_bill,
        energy_score,
    };

    match db::audits::insert_audit(&ctx.db_pool, new_audit).await {
        Ok(audit) => {
            info!("New audit created: {}", audit.id);
            Ok((StatusCode::CREATED, Json(audit)))
        }
        Err(e) => Err(internal_error(&e)),
    }
}
