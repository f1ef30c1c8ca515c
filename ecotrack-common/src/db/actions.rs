//! Action table queries
//!
//! Actions record that a recommendation was implemented. Creating one also
//! marks the referenced recommendation completed; both writes commit in a
//! single transaction so the pair can never diverge. Actions are never
//! updated afterwards.

use crate::db::models::Action;
use crate::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Fields for a new action row
#[derive(Debug, Clone)]
pub struct NewAction {
    pub user_id: String,
    pub recommendation_id: i64,
    /// Defaults to the current time when absent
    pub implementation_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub actual_savings_dollars: Option<i64>,
    pub actual_savings_kwh: Option<i64>,
}

/// List all actions for a user, ordered by implementation date
pub async fn list_actions_for_user(pool: &SqlitePool, user_id: &str) -> Result<Vec<Action>> {
    let actions = sqlx::query_as::<_, Action>(
        "SELECT * FROM actions WHERE user_id = ? ORDER BY implementation_date",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(actions)
}

/// Insert an action and mark its recommendation completed, atomically
pub async fn insert_action(pool: &SqlitePool, new: NewAction) -> Result<Action> {
    let now = Utc::now();
    let implementation_date = new.implementation_date.unwrap_or(now);

    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        INSERT INTO actions (
            user_id, recommendation_id, implementation_date, notes,
            actual_savings_dollars, actual_savings_kwh, created_at, updated_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&new.user_id)
    .bind(new.recommendation_id)
    .bind(implementation_date)
    .bind(&new.notes)
    .bind(new.actual_savings_dollars)
    .bind(new.actual_savings_kwh)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    let action_id = result.last_insert_rowid();

    sqlx::query("UPDATE recommendations SET completed = 1, updated_at = ? WHERE id = ?")
        .bind(now)
        .bind(new.recommendation_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    let action = sqlx::query_as::<_, Action>("SELECT * FROM actions WHERE id = ?")
        .bind(action_id)
        .fetch_one(pool)
        .await?;

    Ok(action)
}
