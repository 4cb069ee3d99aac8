//! Document store abstraction.
//!
//! Endpoint handlers speak to storage exclusively through [`DocumentStore`],
//! keeping them independent of the backing technology. Identifiers never
//! leave this boundary in their native form; they are rendered as text.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::Result;

/// Exact-match filter: field name to expected value. Empty matches everything.
pub type DocumentFilter = Map<String, Value>;

/// Field injected into returned documents carrying the text-rendered id.
pub const ID_FIELD: &str = "_id";

/// Collection-parameterized insert/query primitives over a document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Append one document to the named collection, returning its new
    /// store-generated identifier rendered as text.
    async fn insert(&self, collection: &str, document: Value) -> Result<String>;

    /// Fetch documents matching `filter`, at most `limit` when one is given.
    ///
    /// Each returned document carries an [`ID_FIELD`] string entry. Ordering
    /// follows the adapter's configuration and is not contractual.
    async fn query(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: Option<i64>,
    ) -> Result<Vec<Value>>;

    /// Names of the collections currently present, for diagnostics.
    async fn collection_names(&self) -> Result<Vec<String>>;
}
