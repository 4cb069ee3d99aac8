//! Flashcard HTTP handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{ApiError, AppState};
use studykit_core::{DocumentFilter, DocumentStore, Flashcard};

/// Query parameters for listing flashcards.
#[derive(Debug, Deserialize)]
pub struct ListFlashcardsQuery {
    /// Exact-match tag filter; empty or absent means no filter.
    pub tag: Option<String>,
}

/// Create a flashcard.
pub async fn create_flashcard(
    State(state): State<AppState>,
    Json(card): Json<Flashcard>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    card.validate()?;
    let document = serde_json::to_value(&card)?;
    let id = state
        .store()?
        .insert(Flashcard::COLLECTION, document)
        .await?;
    debug!(subsystem = "api", op = "create_flashcard", id = %id, "Flashcard created");
    Ok((StatusCode::CREATED, Json(serde_json::json!({ "id": id }))))
}

/// List flashcards, optionally filtered by exact tag match.
pub async fn list_flashcards(
    State(state): State<AppState>,
    Query(query): Query<ListFlashcardsQuery>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let mut filter = DocumentFilter::new();
    if let Some(tag) = query.tag.filter(|t| !t.is_empty()) {
        filter.insert("tag".to_string(), Value::String(tag));
    }
    let cards = state
        .store()?
        .query(Flashcard::COLLECTION, &filter, None)
        .await?;
    Ok(Json(cards))
}
