//! Recommendation table queries
//!
//! Generated recommendations are inserted as a batch inside one transaction
//! so a failure never leaves a partial catalog behind. The completed flag is
//! monotonic: once true it never reverts.

use crate::db::models::Recommendation;
use crate::Result;
use chrono::Utc;
use sqlx::SqlitePool;

/// A recommendation draft produced by the generator, not yet persisted
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationDraft {
    pub title: String,
    pub description: String,
    pub potential_savings_dollars: i64,
    pub potential_savings_kwh: i64,
    pub implementation_cost: i64,
    /// Months; None when projected savings are zero
    pub payback_period: Option<i64>,
    pub priority: i64,
}

/// List all recommendations for a user, most urgent (lowest priority) first
pub async fn list_recommendations_for_user(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<Recommendation>> {
    let recommendations = sqlx::query_as::<_, Recommendation>(
        "SELECT * FROM recommendations WHERE user_id = ? ORDER BY priority",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(recommendations)
}

/// Look up a single recommendation by id
pub async fn get_recommendation(
    pool: &SqlitePool,
    recommendation_id: i64,
) -> Result<Option<Recommendation>> {
    let recommendation =
        sqlx::query_as::<_, Recommendation>("SELECT * FROM recommendations WHERE id = ?")
            .bind(recommendation_id)
            .fetch_optional(pool)
            .await?;

    Ok(recommendation)
}

/// Insert a batch of drafts for one audit in a single transaction
///
/// Returns the created rows in draft order.
pub async fn insert_recommendations(
    pool: &SqlitePool,
    audit_id: i64,
    user_id: &str,
    drafts: &[RecommendationDraft],
) -> Result<Vec<Recommendation>> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;
    let mut ids = Vec::with_capacity(drafts.len());

    for draft in drafts {
        let result = sqlx::query(
            r#"
            INSERT INTO recommendations (
                audit_id, user_id, title, description, potential_savings_dollars,
                potential_savings_kwh, implementation_cost, payback_period,
                priority, completed, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?)
            "#,
        )
        .bind(audit_id)
        .bind(user_id)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.potential_savings_dollars)
        .bind(draft.potential_savings_kwh)
        .bind(draft.implementation_cost)
        .bind(draft.payback_period)
        .bind(draft.priority)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        ids.push(result.last_insert_rowid());
    }

    tx.commit().await?;

    let mut created = Vec::with_capacity(ids.len());
    for id in ids {
        let row = sqlx::query_as::<_, Recommendation>("SELECT * FROM recommendations WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await?;
        created.push(row);
    }

    Ok(created)
}

/// Update the completed flag of a recommendation
///
/// Completion is one-way: a request to clear the flag on a completed row
/// leaves it completed. Returns None when no row matches the id.
pub async fn set_completed(
    pool: &SqlitePool,
    recommendation_id: i64,
    completed: bool,
) -> Result<Option<Recommendation>> {
    let now = Utc::now();

    let result = sqlx::query(
        r#"
        UPDATE recommendations
        SET completed = MAX(completed, ?), updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(completed)
    .bind(now)
    .bind(recommendation_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_recommendation(pool, recommendation_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::audits::{insert_audit, NewAudit};
    use crate::db::init::create_schema;
    use crate::db::users::insert_user;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        create_schema(&pool).await.unwrap();
        pool
    }

    async fn seed_user_and_audit(pool: &SqlitePool) -> (String, i64) {
        let user = insert_user(pool, "alice@example.com").await.unwrap();
        let audit = insert_audit(
            pool,
            NewAudit {
                user_id: user.id.clone(),
                housing_type: "townhouse".to_string(),
                house_size: 1500,
                insulation_type: None,
                heating_system: None,
                cooling_system: None,
                appliance_data: None,
                current_energy_bill: Some(150),
                energy_score: 55,
            },
        )
        .await
        .unwrap();
        (user.id, audit.id)
    }

    fn draft(title: &str, priority: i64) -> RecommendationDraft {
        RecommendationDraft {
            title: title.to_string(),
            description: "test".to_string(),
            potential_savings_dollars: 12,
            potential_savings_kwh: 750,
            implementation_cost: 200,
            payback_period: Some(17),
            priority,
        }
    }

    #[tokio::test]
    async fn test_batch_insert_preserves_draft_order() {
        let db = setup_test_db().await;
        let (user_id, audit_id) = seed_user_and_audit(&db).await;

        let drafts = vec![draft("LED Lighting", 3), draft("Smart Thermostat", 2)];
        let created = insert_recommendations(&db, audit_id, &user_id, &drafts)
            .await
            .unwrap();

        assert_eq!(created.len(), 2);
        assert_eq!(created[0].title, "LED Lighting");
        assert_eq!(created[1].title, "Smart Thermostat");
        assert!(!created[0].completed);
    }

    #[tokio::test]
    async fn test_list_ordered_by_priority() {
        let db = setup_test_db().await;
        let (user_id, audit_id) = seed_user_and_audit(&db).await;

        let drafts = vec![draft("LED Lighting", 3), draft("Insulation", 1)];
        insert_recommendations(&db, audit_id, &user_id, &drafts)
            .await
            .unwrap();

        let listed = list_recommendations_for_user(&db, &user_id).await.unwrap();
        assert_eq!(listed[0].title, "Insulation");
        assert_eq!(listed[1].title, "LED Lighting");
    }

    #[tokio::test]
    async fn test_set_completed_is_one_way() {
        let db = setup_test_db().await;
        let (user_id, audit_id) = seed_user_and_audit(&db).await;

        let created = insert_recommendations(&db, audit_id, &user_id, &[draft("LED", 3)])
            .await
            .unwrap();
        let id = created[0].id;

        let updated = set_completed(&db, id, true).await.unwrap().unwrap();
        assert!(updated.completed);

        // Clearing the flag must not revert completion
        let reverted = set_completed(&db, id, false).await.unwrap().unwrap();
        assert!(reverted.completed);
    }

    #[tokio::test]
    async fn test_set_completed_missing_row() {
        let db = setup_test_db().await;

        let missing = set_completed(&db, 9999, true).await.unwrap();
        assert!(missing.is_none());
    }
}
