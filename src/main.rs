use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use noteapp::{
    api::{create_router, AppState},
    auth::TokenCodec,
    config::Config,
    error::AppError,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,noteapp=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Starting noteapp server v{}...", env!("CARGO_PKG_VERSION"));

    // Load configuration (fails fast on a missing JWT_SECRET)
    let config = Arc::new(Config::from_env()?);
    tracing::info!("✅ Configuration loaded");

    // Setup database with connection pooling
    let db = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&config.database_url)
        .await?;

    tracing::info!("✅ Database connected: {}", config.database_url);

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .map_err(|e| AppError::Internal(format!("Migration failed: {}", e)))?;

    tracing::info!("✅ Database migrations completed");

    let tokens = Arc::new(TokenCodec::new(&config.jwt_secret, config.token_ttl_days));
    tracing::info!("✅ Token codec configured ({}-day validity)", config.token_ttl_days);

    // Create shared application state
    let state = AppState { db, tokens };

    // Build router
    let app = create_router(state);

    // Bind and serve
    let addr = config.server_address();
    tracing::info!("🌐 Server listening on http://{}", addr);
    tracing::info!("");
    tracing::info!("📚 API Endpoints:");
    tracing::info!("  POST   /signup          - Register new user");
    tracing::info!("  POST   /signin          - Login, returns bearer token");
    tracing::info!("  GET    /getProfile      - Get user profile (requires auth)");
    tracing::info!("  GET    /getNotes        - List owned notes (requires auth)");
    tracing::info!("  GET    /getNote/:id     - Get one note (requires auth)");
    tracing::info!("  POST   /addNote         - Create note (requires auth)");
    tracing::info!("  PUT    /updateNote/:id  - Update note (requires auth)");
    tracing::info!("  DELETE /deleteNote/:id  - Delete note (requires auth)");
    tracing::info!("");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
