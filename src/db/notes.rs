use sqlx::{Pool, Sqlite};
use uuid::Uuid;

use crate::db::models::Note;
use crate::error::AppError;

// Every read/write below keys on (id, user_id). Ownership is the query
// filter itself: a non-owner's lookup comes back empty, same as a missing
// note, so existence is never leaked.
pub struct NoteRepository;

impl NoteRepository {
    pub async fn create(
        pool: &Pool<Sqlite>,
        user_id: &str,
        title: &str,
        content: &str,
    ) -> Result<Note, AppError> {
        let id = Uuid::new_v4().to_string();
        let created_at = chrono::Utc::now().timestamp();

        let note = sqlx::query_as::<_, Note>(
            r#"
INSERT INTO notes (id, user_id, title, content, created_at)
VALUES (?, ?, ?, ?, ?)
RETURNING *
            "#,
        )
        .bind(&id)
        .bind(user_id)
        .bind(title)
        .bind(content)
        .bind(created_at)
        .fetch_one(pool)
        .await?;

        Ok(note)
    }

    /// Insertion order, not creation time
    pub async fn list_by_user(pool: &Pool<Sqlite>, user_id: &str) -> Result<Vec<Note>, AppError> {
        let notes = sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE user_id = ?")
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        Ok(notes)
    }

    pub async fn find_by_user_and_id(
        pool: &Pool<Sqlite>,
        user_id: &str,
        id: &str,
    ) -> Result<Option<Note>, AppError> {
        let note =
            sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = ? AND user_id = ?")
                .bind(id)
                .bind(user_id)
                .fetch_optional(pool)
                .await?;

        Ok(note)
    }

    /// An omitted field keeps its stored value. Returns the post-update
    /// record, or None if no matching owned note exists.
    pub async fn update_by_user_and_id(
        pool: &Pool<Sqlite>,
        user_id: &str,
        id: &str,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Option<Note>, AppError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
UPDATE notes
SET title = COALESCE(?, title), content = COALESCE(?, content)
WHERE id = ? AND user_id = ?
RETURNING *
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(note)
    }

    /// Returns the deleted record for confirmation
    pub async fn delete_by_user_and_id(
        pool: &Pool<Sqlite>,
        user_id: &str,
        id: &str,
    ) -> Result<Option<Note>, AppError> {
        let note = sqlx::query_as::<_, Note>(
            "DELETE FROM notes WHERE id = ? AND user_id = ? RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(note)
    }
}
