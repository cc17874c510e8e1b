use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::api::payload::NoteBody;
use crate::api::state::AppState;
use crate::db::NoteRepository;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct AddNoteRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteNoteResponse {
    pub message: String,
    pub note: NoteBody,
}

/// GET /getNotes (requires auth)
pub async fn list_notes(
    State(state): State<AppState>,
    Extension(user_id): Extension<String>,
) -> Result<Json<Vec<NoteBody>>, AppError> {
    let notes = NoteRepository::list_by_user(&state.db, &user_id).await?;

    Ok(Json(notes.into_iter().map(NoteBody::from).collect()))
}

/// GET /getNote/:id (requires auth)
pub async fn get_note(
    State(state): State<AppState>,
    Extension(user_id): Extension<String>,
    Path(id): Path<String>,
) -> Result<Json<NoteBody>, AppError> {
    let note = NoteRepository::find_by_user_and_id(&state.db, &user_id, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Note not found".to_string()))?;

    Ok(Json(NoteBody::from(note)))
}

/// POST /addNote (requires auth)
pub async fn add_note(
    State(state): State<AppState>,
    Extension(user_id): Extension<String>,
    Json(req): Json<AddNoteRequest>,
) -> Result<(StatusCode, Json<NoteBody>), AppError> {
    let note = NoteRepository::create(&state.db, &user_id, &req.title, &req.content).await?;

    Ok((StatusCode::CREATED, Json(NoteBody::from(note))))
}

/// PUT /updateNote/:id (requires auth)
pub async fn update_note(
    State(state): State<AppState>,
    Extension(user_id): Extension<String>,
    Path(id): Path<String>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Json<NoteBody>, AppError> {
    let note = NoteRepository::update_by_user_and_id(
        &state.db,
        &user_id,
        &id,
        req.title.as_deref(),
        req.content.as_deref(),
    )
    .await?
    .ok_or_else(|| AppError::NotFound("Note not found".to_string()))?;

    Ok(Json(NoteBody::from(note)))
}

/// DELETE /deleteNote/:id (requires auth)
pub async fn delete_note(
    State(state): State<AppState>,
    Extension(user_id): Extension<String>,
    Path(id): Path<String>,
) -> Result<Json<DeleteNoteResponse>, AppError> {
    let note = NoteRepository::delete_by_user_and_id(&state.db, &user_id, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Note not found".to_string()))?;

    Ok(Json(DeleteNoteResponse {
        message: "Note deleted successfully".to_string(),
        note: NoteBody::from(note),
    }))
}
