use sqlx::{Pool, Sqlite};
use uuid::Uuid;

use crate::db::models::User;
use crate::error::AppError;

pub struct UserRepository;

impl UserRepository {
    pub async fn create(
        pool: &Pool<Sqlite>,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AppError> {
        let id = Uuid::new_v4().to_string();
        let created_at = chrono::Utc::now().timestamp();

        let user = sqlx::query_as::<_, User>(
            r#"
INSERT INTO users (id, name, email, password_hash, created_at)
VALUES (?, ?, ?, ?, ?)
RETURNING *
            "#,
        )
        .bind(&id)
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(created_at)
        .fetch_one(pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::DuplicateEmail,
            _ => AppError::Database(e),
        })?;

        Ok(user)
    }

    pub async fn find_by_email(
        pool: &Pool<Sqlite>,
        email: &str,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_id(pool: &Pool<Sqlite>, id: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn pool() -> Pool<Sqlite> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = pool().await;

        let user = UserRepository::create(&pool, "Alice", "a@x.com", "$argon2$stub")
            .await
            .unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "a@x.com");

        let by_email = UserRepository::find_by_email(&pool, "a@x.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id, user.id);

        let by_id = UserRepository::find_by_id(&pool, &user.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_id.email, "a@x.com");

        assert!(UserRepository::find_by_email(&pool, "b@x.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_distinct_error() {
        let pool = pool().await;

        UserRepository::create(&pool, "Alice", "a@x.com", "hash1")
            .await
            .unwrap();

        // Same email, different name and password
        let err = UserRepository::create(&pool, "Bob", "a@x.com", "hash2")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmail));
    }
}
