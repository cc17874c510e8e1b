use sqlx::FromRow;

// Row types stay out of the wire format on purpose: nothing here derives
// Serialize, so a stored password hash cannot leak through a handler.
// Client-facing shapes live in `api::payload`.

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct Note {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub created_at: i64,
}
