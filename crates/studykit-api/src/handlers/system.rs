//! Liveness and store diagnostics handlers.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::AppState;
use studykit_core::defaults::{DIAGNOSTIC_COLLECTION_PREVIEW, DIAGNOSTIC_ERROR_PREVIEW};
use studykit_core::DocumentStore;

/// Liveness message.
pub async fn root() -> Json<Value> {
    Json(serde_json::json!({
        "message": "Studykit backend is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Reachability report for the backing document store.
#[derive(Debug, Serialize)]
pub struct StoreDiagnostics {
    /// Always "running" when this handler answers.
    pub backend: &'static str,
    /// "connected", "unavailable", or "error: ...".
    pub store: String,
    /// "connected" or "not connected".
    pub connection_status: &'static str,
    /// Whether DATABASE_URL was present at startup.
    pub database_url: &'static str,
    /// Whether DATABASE_NAME was present at startup.
    pub database_name: &'static str,
    /// Names of present collections, capped at ten.
    pub collections: Vec<String>,
}

/// Probe store reachability without touching record data.
pub async fn store_diagnostics(State(state): State<AppState>) -> Json<StoreDiagnostics> {
    let mut report = StoreDiagnostics {
        backend: "running",
        store: "unavailable".to_string(),
        connection_status: "not connected",
        database_url: if state.database_url_set { "set" } else { "not set" },
        database_name: if state.database_name_set { "set" } else { "not set" },
        collections: Vec::new(),
    };

    if let Some(store) = &state.store {
        match store.collection_names().await {
            Ok(names) => {
                report.store = "connected".to_string();
                report.connection_status = "connected";
                report.collections = names
                    .into_iter()
                    .take(DIAGNOSTIC_COLLECTION_PREVIEW)
                    .collect();
            }
            Err(err) => {
                let detail: String = err.to_string().chars().take(DIAGNOSTIC_ERROR_PREVIEW).collect();
                report.store = format!("error: {}", detail);
                report.connection_status = "connected";
            }
        }
    }

    Json(report)
}
