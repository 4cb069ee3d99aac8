//! # studykit-core
//!
//! Core types, traits, and abstractions for the studykit study-notes service.
//!
//! This crate provides the record schemas, the document store abstraction,
//! and the heuristic summarizer that the other studykit crates build on.

pub mod defaults;
pub mod error;
pub mod models;
pub mod store;
pub mod summarize;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{Flashcard, Note, Question, Summary};
pub use store::{DocumentFilter, DocumentStore};
pub use summarize::{
    clip_stored_text, decode_upload_text, summarize, EMPTY_SUMMARY, UPLOAD_PLACEHOLDER,
};
