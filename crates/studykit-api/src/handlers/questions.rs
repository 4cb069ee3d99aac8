//! Multiple-choice question HTTP handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{ApiError, AppState};
use studykit_core::{DocumentFilter, DocumentStore, Question};

/// Query parameters for listing questions.
#[derive(Debug, Deserialize)]
pub struct ListQuestionsQuery {
    /// Exact-match tag filter; empty or absent means no filter.
    pub tag: Option<String>,
}

/// Create a question.
///
/// Validation rejects fewer than two options and a negative answer index
/// before anything reaches storage. Whether the index falls inside the
/// options is not checked.
pub async fn create_question(
    State(state): State<AppState>,
    Json(question): Json<Question>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    question.validate()?;
    let document = serde_json::to_value(&question)?;
    let id = state
        .store()?
        .insert(Question::COLLECTION, document)
        .await?;
    debug!(subsystem = "api", op = "create_question", id = %id, "Question created");
    Ok((StatusCode::CREATED, Json(serde_json::json!({ "id": id }))))
}

/// List questions, optionally filtered by exact tag match.
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<ListQuestionsQuery>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let mut filter = DocumentFilter::new();
    if let Some(tag) = query.tag.filter(|t| !t.is_empty()) {
        filter.insert("tag".to_string(), Value::String(tag));
    }
    let questions = state
        .store()?
        .query(Question::COLLECTION, &filter, None)
        .await?;
    Ok(Json(questions))
}
