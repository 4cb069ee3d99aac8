//! In-memory document store used as a test double.
//!
//! Mirrors the PostgreSQL adapter's observable behavior: store-generated
//! time-ordered ids rendered as text, exact-match filtering, insertion-order
//! listing, and a limit cap. API integration tests drive the full router
//! against this store so no live database is required.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use studykit_core::store::ID_FIELD;
use studykit_core::{DocumentFilter, DocumentStore, Result};

/// Hash-map backed [`DocumentStore`] for tests and offline development.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<(Uuid, Value)>>>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in the named collection.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

fn matches(body: &Value, filter: &DocumentFilter) -> bool {
    filter
        .iter()
        .all(|(field, expected)| body.get(field) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<String> {
        let id = Uuid::now_v7();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push((id, document));
        Ok(id.to_string())
    }

    async fn query(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: Option<i64>,
    ) -> Result<Vec<Value>> {
        let collections = self.collections.read().await;
        let documents = collections.get(collection).map_or(&[][..], Vec::as_slice);
        let cap = limit.map_or(usize::MAX, |n| n.max(0) as usize);
        Ok(documents
            .iter()
            .filter(|(_, body)| matches(body, filter))
            .take(cap)
            .map(|(id, body)| {
                let mut body = body.clone();
                if let Some(object) = body.as_object_mut() {
                    object.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
                }
                body
            })
            .collect())
    }

    async fn collection_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.collections.read().await.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
