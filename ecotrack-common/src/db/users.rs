//! User table queries
//!
//! Users are keyed by unique email and created on first login. There is no
//! delete path.

use crate::db::models::User;
use crate::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Look up a user by email
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Create a new user with the given email
///
/// Callers are expected to check for an existing row first; the unique
/// constraint on email backstops a race between two first-login requests.
pub async fn insert_user(pool: &SqlitePool, email: &str) -> Result<User> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO users (id, email, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(email)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(&id)
        .fetch_one(pool)
        .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init::create_schema;
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

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let db = setup_test_db().await;

        // Unknown email returns None
        let missing = get_user_by_email(&db, "nobody@example.com").await.unwrap();
        assert!(missing.is_none());

        let created = insert_user(&db, "alice@example.com").await.unwrap();
        assert_eq!(created.email, "alice@example.com");

        let found = get_user_by_email(&db, "alice@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, created.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let db = setup_test_db().await;

        insert_user(&db, "bob@example.com").await.unwrap();
        let duplicate = insert_user(&db, "bob@example.com").await;
        assert!(duplicate.is_err());
    }
}
