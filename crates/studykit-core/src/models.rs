//! Record schemas for the four studykit collections.
//!
//! Each record kind maps to one document collection; the collection name is
//! the lowercase record name. Validation is purely structural: required text
//! must be present and non-blank, and `Question` carries two shape checks on
//! its numeric fields. Nothing verifies that `answer_index` actually falls
//! inside `options` — callers get back exactly what they stored.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A free-form study note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Note title.
    pub title: String,
    /// Note content (markdown or plain text).
    pub content: String,
    /// Optional topic used for exact-match filtering.
    pub topic: Option<String>,
}

impl Note {
    /// Collection this record kind is stored in.
    pub const COLLECTION: &'static str = "note";

    /// Check structural invariants before the record reaches storage.
    pub fn validate(&self) -> Result<()> {
        require_text("title", &self.title)?;
        require_text("content", &self.content)?;
        Ok(())
    }
}

/// A two-sided flashcard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    /// Prompt side.
    pub front: String,
    /// Answer side.
    pub back: String,
    /// Optional subject tag used for exact-match filtering.
    pub tag: Option<String>,
}

impl Flashcard {
    /// Collection this record kind is stored in.
    pub const COLLECTION: &'static str = "flashcard";

    /// Check structural invariants before the record reaches storage.
    pub fn validate(&self) -> Result<()> {
        require_text("front", &self.front)?;
        require_text("back", &self.back)?;
        Ok(())
    }
}

/// A multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Question text.
    pub question: String,
    /// Multiple-choice options, in display order.
    pub options: Vec<String>,
    /// Index of the correct option. Kept signed so a negative value reaches
    /// validation instead of dying in JSON deserialization.
    pub answer_index: i64,
    /// Optional subject tag used for exact-match filtering.
    pub tag: Option<String>,
}

impl Question {
    /// Collection this record kind is stored in.
    pub const COLLECTION: &'static str = "question";

    /// Check structural invariants before the record reaches storage.
    pub fn validate(&self) -> Result<()> {
        require_text("question", &self.question)?;
        if self.options.len() < 2 {
            return Err(Error::InvalidInput(
                "options must contain at least 2 entries".to_string(),
            ));
        }
        if self.answer_index < 0 {
            return Err(Error::InvalidInput(
                "answer_index must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// A persisted upload summary.
///
/// Built server-side from an upload; `summary` is derived from `text` and is
/// never edited independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// Original uploaded file name.
    pub file_name: String,
    /// Raw decoded text, clipped before storage.
    pub text: String,
    /// Generated extractive summary.
    pub summary: String,
}

impl Summary {
    /// Collection this record kind is stored in.
    pub const COLLECTION: &'static str = "summary";

    /// Check structural invariants before the record reaches storage.
    pub fn validate(&self) -> Result<()> {
        require_text("file_name", &self.file_name)?;
        require_text("text", &self.text)?;
        require_text("summary", &self.summary)?;
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(())
}
