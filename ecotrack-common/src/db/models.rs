//! Database models
//!
//! Row structs serialize with camelCase field names, which is the wire
//! format the HTTP API exposes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A registered user, keyed by unique email
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Appliance inventory submitted with an audit
///
/// All flags default to false when absent from the request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplianceData {
    pub refrigerator: bool,
    pub washer: bool,
    pub dryer: bool,
    pub dishwasher: bool,
    pub energy_star_appliances: bool,
}

/// A home energy audit snapshot with its derived score
///
/// Audits are immutable once created; there is no update path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    pub id: i64,
    pub user_id: String,
    pub housing_type: String,
    /// House size in square feet
    pub house_size: i64,
    pub insulation_type: Option<String>,
    pub heating_system: Option<String>,
    pub cooling_system: Option<String>,
    pub appliance_data: Option<Json<ApplianceData>>,
    /// Monthly bill in dollars
    pub current_energy_bill: Option<i64>,
    /// Calculated energy efficiency score, always in [0, 100]
    pub energy_score: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A suggested efficiency improvement generated from an audit
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: i64,
    pub audit_id: i64,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub potential_savings_dollars: i64,
    pub potential_savings_kwh: i64,
    /// Estimated cost to implement, in dollars
    pub implementation_cost: i64,
    /// Payback period in months; None when projected savings are zero
    pub payback_period: Option<i64>,
    /// 1-5 priority level, lower is more urgent
    pub priority: i64,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A record that a recommendation was actually implemented
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: i64,
    pub user_id: String,
    pub recommendation_id: i64,
    pub implementation_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub actual_savings_dollars: Option<i64>,
    pub actual_savings_kwh: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
