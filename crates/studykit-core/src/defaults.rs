//! Centralized default constants for the studykit system.
//!
//! **This module is the single source of truth** for shared default values.
//! Crates reference these constants instead of defining their own magic
//! numbers.

// =============================================================================
// SUMMARIZER
// =============================================================================

/// Number of leading sentence fragments kept in a generated summary.
pub const SUMMARY_MAX_SENTENCES: usize = 5;

/// Maximum characters of raw upload text persisted with a summary record.
/// Counted in characters, not bytes.
pub const STORED_TEXT_MAX_CHARS: usize = 10_000;

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for the summary list endpoint.
pub const SUMMARY_PAGE_LIMIT: i64 = 20;

// =============================================================================
// SERVER
// =============================================================================

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 8000;

/// Default HTTP bind host.
pub const SERVER_HOST: &str = "0.0.0.0";

/// Maximum accepted upload body size in bytes.
pub const UPLOAD_BODY_LIMIT: usize = 25 * 1024 * 1024;

// =============================================================================
// DIAGNOSTICS
// =============================================================================

/// Collections listed by the diagnostic endpoint, at most.
pub const DIAGNOSTIC_COLLECTION_PREVIEW: usize = 10;

/// Characters of backend error text surfaced by the diagnostic endpoint.
pub const DIAGNOSTIC_ERROR_PREVIEW: usize = 50;

// =============================================================================
// ENVIRONMENT VARIABLES
// =============================================================================

/// Connection string for the document store server.
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// Name of the database holding the studykit collections.
pub const ENV_DATABASE_NAME: &str = "DATABASE_NAME";
