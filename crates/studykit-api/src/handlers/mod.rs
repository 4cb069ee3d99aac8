//! Handler modules for studykit-api.

pub mod flashcards;
pub mod notes;
pub mod questions;
pub mod summaries;
pub mod system;
