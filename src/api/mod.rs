pub mod auth;
pub mod middleware;
pub mod notes;
pub mod payload;
pub mod state;

pub use state::AppState;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn create_router(state: AppState) -> Router {
    // Everything except signup/signin sits behind the auth gate
    let protected = Router::new()
        .route("/getProfile", get(auth::get_profile))
        .route("/getNotes", get(notes::list_notes))
        .route("/getNote/:id", get(notes::get_note))
        .route("/addNote", post(notes::add_note))
        .route("/updateNote/:id", put(notes::update_note))
        .route("/deleteNote/:id", delete(notes::delete_note))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/signup", post(auth::signup))
        .route("/signin", post(auth::signin))
        .merge(protected)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
