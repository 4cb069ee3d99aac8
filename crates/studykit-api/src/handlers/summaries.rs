//! Upload summarization and summary listing handlers.

use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{ApiError, AppState};
use studykit_core::defaults::SUMMARY_PAGE_LIMIT;
use studykit_core::{
    clip_stored_text, decode_upload_text, summarize, DocumentFilter, DocumentStore, Summary,
    UPLOAD_PLACEHOLDER,
};

/// File name recorded when the multipart part carries none.
const FALLBACK_FILE_NAME: &str = "upload";

/// Response from upload summarization.
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    /// Identifier of the persisted summary record.
    pub id: String,
    /// The derived extractive summary.
    pub summary: String,
}

/// Query parameters for listing summaries.
#[derive(Debug, Deserialize)]
pub struct ListSummariesQuery {
    /// Maximum records returned (default 20).
    pub limit: Option<i64>,
}

/// Summarize an uploaded file and persist the result.
///
/// Accepts multipart/form-data with a `file` part. Bytes are decoded
/// leniently — undecodable sequences are dropped — and uploads with no
/// decodable text are stored with a placeholder so every upload leaves a
/// record. The raw text is clipped to its first 10,000 characters before
/// storage; the summary is derived from the unclipped text.
///
/// # Returns
/// - 201 Created with `{ "id": "<text id>", "summary": "<summary>" }`
/// - 400 Bad Request if the multipart body is malformed or has no file
/// - 503 Service Unavailable if the store never initialized
/// - 500 Internal Server Error if the write is rejected
pub async fn summarize_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<SummarizeResponse>), ApiError> {
    let mut file_name: Option<String> = None;
    let mut file_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Multipart error: {}", e)))?
    {
        let field_name = field.name().map(|n| n.to_string());
        match field_name.as_deref() {
            Some("file") => {
                file_name = field.file_name().map(|n| n.to_string());
                file_data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::BadRequest(format!("Read error: {}", e)))?
                        .to_vec(),
                );
            }
            _ => {} // ignore unknown fields
        }
    }

    let bytes = file_data
        .ok_or_else(|| ApiError::BadRequest("Missing file in multipart form".to_string()))?;

    let mut text = decode_upload_text(&bytes);
    if text.trim().is_empty() {
        text = UPLOAD_PLACEHOLDER.to_string();
    }
    let summary = summarize(&text);

    let record = Summary {
        file_name: file_name.unwrap_or_else(|| FALLBACK_FILE_NAME.to_string()),
        text: clip_stored_text(&text),
        summary: summary.clone(),
    };
    record.validate()?;
    let document = serde_json::to_value(&record)?;
    let id = state.store()?.insert(Summary::COLLECTION, document).await?;

    debug!(
        subsystem = "api",
        op = "summarize_upload",
        id = %id,
        upload_bytes = bytes.len(),
        "Upload summarized"
    );
    Ok((StatusCode::CREATED, Json(SummarizeResponse { id, summary })))
}

/// List stored summaries, at most `limit` records (default 20).
pub async fn list_summaries(
    State(state): State<AppState>,
    Query(query): Query<ListSummariesQuery>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let limit = query.limit.unwrap_or(SUMMARY_PAGE_LIMIT);
    let summaries = state
        .store()?
        .query(Summary::COLLECTION, &DocumentFilter::new(), Some(limit))
        .await?;
    Ok(Json(summaries))
}
