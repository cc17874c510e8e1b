use std::sync::Arc;

use sqlx::{Pool, Sqlite};

use crate::auth::TokenCodec;

#[derive(Clone)]
pub struct AppState {
    pub db: Pool<Sqlite>,
    pub tokens: Arc<TokenCodec>,
}
