//! JSONB-backed document store implementation.
//!
//! One `document` table holds every collection: the collection name is a
//! column, the record body is JSONB, and exact-match filters become JSONB
//! containment checks. Identifiers are time-ordered UUIDv7, so primary-key
//! order is insertion order.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{Pool, Postgres, Row};
use tracing::debug;
use uuid::Uuid;

use studykit_core::store::ID_FIELD;
use studykit_core::{DocumentFilter, DocumentStore, Error, Result};

/// Ordering applied to query results.
///
/// Nothing in the API contract promises an order; `Insertion` is the default
/// because it is the least surprising for a personal dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListOrder {
    /// Order by the time-ordered primary key (insertion order).
    #[default]
    Insertion,
    /// Whatever the database returns.
    Unspecified,
}

/// PostgreSQL implementation of [`DocumentStore`].
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: Pool<Postgres>,
    order: ListOrder,
}

impl PgDocumentStore {
    /// Create a new PgDocumentStore with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            pool,
            order: ListOrder::default(),
        }
    }

    /// Override the query result ordering.
    pub fn with_order(mut self, order: ListOrder) -> Self {
        self.order = order;
        self
    }
}

/// Build the SELECT statement for a query call.
///
/// Parameter order is fixed: `$1` collection, then the filter document when
/// one is present, then the limit when one is given.
fn build_query_sql(has_filter: bool, order: ListOrder, has_limit: bool) -> String {
    let mut sql = String::from("SELECT id, body FROM document WHERE collection = $1");
    let mut param = 2;
    if has_filter {
        sql.push_str(&format!(" AND body @> ${}", param));
        param += 1;
    }
    if order == ListOrder::Insertion {
        sql.push_str(" ORDER BY id");
    }
    if has_limit {
        sql.push_str(&format!(" LIMIT ${}", param));
    }
    sql
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<String> {
        let id = Uuid::now_v7();
        sqlx::query("INSERT INTO document (id, collection, body) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(collection)
            .bind(&document)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        debug!(
            subsystem = "db",
            op = "insert",
            collection,
            id = %id,
            "Document inserted"
        );
        Ok(id.to_string())
    }

    async fn query(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: Option<i64>,
    ) -> Result<Vec<Value>> {
        let filter_doc = (!filter.is_empty()).then(|| Value::Object(filter.clone()));
        let sql = build_query_sql(filter_doc.is_some(), self.order, limit.is_some());

        let mut query = sqlx::query(&sql).bind(collection);
        if let Some(ref doc) = filter_doc {
            query = query.bind(doc);
        }
        if let Some(limit) = limit {
            query = query.bind(limit);
        }

        let rows = query.fetch_all(&self.pool).await.map_err(Error::Database)?;
        let documents: Vec<Value> = rows
            .into_iter()
            .map(|row| {
                let id: Uuid = row.get("id");
                let mut body: Value = row.get("body");
                if let Some(object) = body.as_object_mut() {
                    object.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
                }
                body
            })
            .collect();

        debug!(
            subsystem = "db",
            op = "query",
            collection,
            result_count = documents.len(),
            "Documents fetched"
        );
        Ok(documents)
    }

    async fn collection_names(&self) -> Result<Vec<String>> {
        let rows = sqlx::query("SELECT DISTINCT collection FROM document ORDER BY collection")
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(rows.into_iter().map(|row| row.get("collection")).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_sql_unfiltered() {
        assert_eq!(
            build_query_sql(false, ListOrder::Insertion, false),
            "SELECT id, body FROM document WHERE collection = $1 ORDER BY id"
        );
    }

    #[test]
    fn test_query_sql_filtered_with_limit() {
        assert_eq!(
            build_query_sql(true, ListOrder::Insertion, true),
            "SELECT id, body FROM document WHERE collection = $1 AND body @> $2 ORDER BY id LIMIT $3"
        );
    }

    #[test]
    fn test_query_sql_limit_parameter_index_without_filter() {
        assert_eq!(
            build_query_sql(false, ListOrder::Insertion, true),
            "SELECT id, body FROM document WHERE collection = $1 ORDER BY id LIMIT $2"
        );
    }

    #[test]
    fn test_query_sql_unspecified_order_has_no_order_clause() {
        assert_eq!(
            build_query_sql(true, ListOrder::Unspecified, false),
            "SELECT id, body FROM document WHERE collection = $1 AND body @> $2"
        );
    }
}
