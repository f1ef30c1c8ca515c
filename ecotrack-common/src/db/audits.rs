//! Audit table queries
//!
//! Audits are write-once snapshots: inserted with a pre-computed energy
//! score, listed in creation order, never updated.

use crate::db::models::{ApplianceData, Audit};
use crate::Result;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;

/// Fields for a new audit row; the score is computed by the caller
#[derive(Debug, Clone)]
pub struct NewAudit {
    pub user_id: String,
    pub housing_type: String,
    pub house_size: i64,
    pub insulation_type: Option<String>,
    pub heating_system: Option<String>,
    pub cooling_system: Option<String>,
    pub appliance_data: Option<ApplianceData>,
    pub current_energy_bill: Option<i64>,
    pub energy_score: i64,
}

/// List all audits for a user, oldest first
pub async fn list_audits_for_user(pool: &SqlitePool, user_id: &str) -> Result<Vec<Audit>> {
    let audits = sqlx::query_as::<_, Audit>(
        "SELECT * FROM audits WHERE user_id = ? ORDER BY created_at",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(audits)
}

/// Look up a single audit by id
pub async fn get_audit(pool: &SqlitePool, audit_id: i64) -> Result<Option<Audit>> {
    let audit = sqlx::query_as::<_, Audit>("SELECT * FROM audits WHERE id = ?")
        .bind(audit_id)
        .fetch_optional(pool)
        .await?;

    Ok(audit)
}

/// Insert a new audit and return the stored row
pub async fn insert_audit(pool: &SqlitePool, new: NewAudit) -> Result<Audit> {
    let now = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO audits (
            user_id, housing_type, house_size, insulation_type, heating_system,
            cooling_system, appliance_data, current_energy_bill, energy_score,
            created_at, updated_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&new.user_id)
    .bind(&new.housing_type)
    .bind(new.house_size)
    .bind(&new.insulation_type)
    .bind(&new.heating_system)
    .bind(&new.cooling_system)
    .bind(new.appliance_data.map(Json))
    .bind(new.current_energy_bill)
    .bind(new.energy_score)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    let audit = sqlx::query_as::<_, Audit>("SELECT * FROM audits WHERE id = ?")
        .bind(result.last_insert_rowid())
        .fetch_one(pool)
        .await?;

    Ok(audit)
}
