//! Note HTTP handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{ApiError, AppState};
use studykit_core::{DocumentFilter, DocumentStore, Note};

/// Query parameters for listing notes.
#[derive(Debug, Deserialize)]
pub struct ListNotesQuery {
    /// Exact-match topic filter; empty or absent means no filter.
    pub topic: Option<String>,
}

/// Create a note.
///
/// # Returns
/// - 201 Created with `{ "id": "<text id>" }`
/// - 400 Bad Request if validation fails
/// - 503 Service Unavailable if the store never initialized
/// - 500 Internal Server Error if the write is rejected
pub async fn create_note(
    State(state): State<AppState>,
    Json(note): Json<Note>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    note.validate()?;
    let document = serde_json::to_value(&note)?;
    let id = state.store()?.insert(Note::COLLECTION, document).await?;
    debug!(subsystem = "api", op = "create_note", id = %id, "Note created");
    Ok((StatusCode::CREATED, Json(serde_json::json!({ "id": id }))))
}

/// List notes, optionally filtered by exact topic match.
pub async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<ListNotesQuery>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let mut filter = DocumentFilter::new();
    if let Some(topic) = query.topic.filter(|t| !t.is_empty()) {
        filter.insert("topic".to_string(), Value::String(topic));
    }
    let notes = state.store()?.query(Note::COLLECTION, &filter, None).await?;
    Ok(Json(notes))
}
