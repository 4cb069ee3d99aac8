//! HTTP API layer for studykit.
//!
//! Handlers, shared application state, and router construction live here so
//! integration tests can drive the full HTTP surface without a network
//! listener; `main.rs` wires the state from the environment and serves it.

pub mod config;
pub mod handlers;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use studykit_core::defaults::UPLOAD_BODY_LIMIT;
use studykit_core::{DocumentStore, Error};

pub use config::StoreConfig;

// =============================================================================
// REQUEST ID (UUIDv7)
// =============================================================================

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically — useful for
/// log correlation when reading back a day's traffic.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

// =============================================================================
// APPLICATION STATE
// =============================================================================

/// Application state shared across handlers.
///
/// The store handle is established once at startup. When initialization
/// failed it stays `None` for the life of the process and every storage
/// operation reports the store as unavailable — there is no lazy retry.
#[derive(Clone)]
pub struct AppState {
    store: Option<Arc<dyn DocumentStore>>,
    database_url_set: bool,
    database_name_set: bool,
}

impl AppState {
    /// Build state from an optional store handle and the observed config.
    pub fn new(store: Option<Arc<dyn DocumentStore>>, config: &StoreConfig) -> Self {
        Self {
            store,
            database_url_set: config.url.is_some(),
            database_name_set: config.name.is_some(),
        }
    }

    /// State with a connected store and no environment configuration.
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store: Some(store),
            database_url_set: false,
            database_name_set: false,
        }
    }

    /// State without any store (degraded mode).
    pub fn degraded() -> Self {
        Self {
            store: None,
            database_url_set: false,
            database_name_set: false,
        }
    }

    /// The store handle, or the distinguishable unavailable error.
    fn store(&self) -> Result<&Arc<dyn DocumentStore>, Error> {
        self.store
            .as_ref()
            .ok_or_else(|| Error::Unavailable("document store is not initialized".to_string()))
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// Build the full application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Liveness and diagnostics
        .route("/", get(handlers::system::root))
        .route("/test", get(handlers::system::store_diagnostics))
        // Notes
        .route(
            "/api/notes",
            post(handlers::notes::create_note).get(handlers::notes::list_notes),
        )
        // Flashcards
        .route(
            "/api/flashcards",
            post(handlers::flashcards::create_flashcard).get(handlers::flashcards::list_flashcards),
        )
        // Questions
        .route(
            "/api/questions",
            post(handlers::questions::create_question).get(handlers::questions::list_questions),
        )
        // Upload summarization
        .route("/api/summarize", post(handlers::summaries::summarize_upload))
        .route("/api/summaries", get(handlers::summaries::list_summaries))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(UPLOAD_BODY_LIMIT))
        .with_state(state)
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

/// Operation-level failures mapped to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Storage failure surfaced with the underlying error text.
    Storage(Error),
    /// Client-caused failure (validation, malformed multipart).
    BadRequest(String),
    /// The store never initialized; the process runs degraded.
    ServiceUnavailable(String),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match &err {
            Error::InvalidInput(msg) => ApiError::BadRequest(msg.clone()),
            Error::Unavailable(_) => ApiError::ServiceUnavailable(err.to_string()),
            _ => ApiError::Storage(err),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Storage(Error::from(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Storage(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
