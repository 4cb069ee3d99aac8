//! Heuristic extractive summarizer and upload text handling.
//!
//! No NLP dependency: sentences are whatever sits between literal periods.
//! The exact fragment handling here is load-bearing — stored summaries from
//! earlier deployments were produced by the same steps.

use crate::defaults::{STORED_TEXT_MAX_CHARS, SUMMARY_MAX_SENTENCES};

/// Returned when the input yields no sentence fragments at all.
pub const EMPTY_SUMMARY: &str = "No content to summarize.";

/// Stored in place of the raw text when an upload has no decodable content.
pub const UPLOAD_PLACEHOLDER: &str =
    "(Binary file uploaded; text extraction not available in demo)";

/// Derive a short extractive summary from raw text.
///
/// Newlines are flattened to spaces, the text is split on literal periods,
/// and the first five non-empty trimmed fragments are rejoined with `". "`
/// plus a trailing period. Fewer than five sentences come back whole; text
/// without any period is returned verbatim with a period appended.
pub fn summarize(text: &str) -> String {
    let normalized = text.replace('\n', " ");
    let sentences: Vec<&str> = normalized
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if sentences.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }
    let mut summary = sentences
        .into_iter()
        .take(SUMMARY_MAX_SENTENCES)
        .collect::<Vec<_>>()
        .join(". ");
    summary.push('.');
    summary
}

/// Best-effort UTF-8 decoding that drops undecodable byte sequences.
///
/// Invalid sequences are skipped entirely, not replaced, so a binary upload
/// reduces to whatever valid UTF-8 runs it happens to contain. Never fails.
pub fn decode_upload_text(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut input = bytes;
    loop {
        match std::str::from_utf8(input) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, rest) = input.split_at(err.valid_up_to());
                if let Ok(s) = std::str::from_utf8(valid) {
                    out.push_str(s);
                }
                match err.error_len() {
                    Some(len) => input = &rest[len..],
                    // Truncated sequence at the end of input.
                    None => break,
                }
            }
        }
    }
    out
}

/// Clip upload text to the persisted size cap.
///
/// Counts characters, not bytes, so a clip never splits a code point.
pub fn clip_stored_text(text: &str) -> String {
    if text.chars().count() <= STORED_TEXT_MAX_CHARS {
        return text.to_string();
    }
    text.chars().take(STORED_TEXT_MAX_CHARS).collect()
}
