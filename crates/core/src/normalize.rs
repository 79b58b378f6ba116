//! Normalization of the raw authoring payload into a [`ProblemDefinition`].
//!
//! The authoring form posts a loosely-shaped JSON object: checkbox keys are
//! present only when checked, feedback fields may arrive blank, and the
//! question set arrives as an object keyed by stringified indices rather
//! than as an ordered array.

use serde_json::Value;
use thiserror::Error;

use crate::model::{ProblemDefinition, Question};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NormalizeError {
    #[error("problem content must be a JSON object")]
    NotAnObject,

    #[error("questions must be a JSON object keyed by index")]
    QuestionsNotAnObject,

    #[error("question key `{key}` is not a non-negative integer")]
    InvalidQuestionKey { key: String },

    #[error("question entry `{key}` is not a JSON object")]
    InvalidQuestionEntry { key: String },
}

/// Normalizes a raw authoring payload into a [`ProblemDefinition`].
///
/// - `unshuffle` / `centralize`: the form posts the key only when the
///   checkbox is checked, so mere presence means true.
/// - Feedback fields that are missing, non-string, or whitespace-only
///   become `None`; anything else is carried verbatim.
/// - `questions` entries are ordered by the numeric value of their keys;
///   blank fields within an entry are dropped. A missing `questions` key
///   yields an empty sequence.
///
/// No semantic validation happens here; the payload is reshaped, not judged.
///
/// # Errors
///
/// Returns `NormalizeError` when the payload or its `questions` member is
/// not an object, or when a question key does not parse as an index.
pub fn normalize_content(raw: &Value) -> Result<ProblemDefinition, NormalizeError> {
    let content = raw.as_object().ok_or(NormalizeError::NotAnObject)?;

    let questions = match content.get("questions") {
        None => Vec::new(),
        Some(Value::Object(entries)) => {
            let mut indexed: Vec<(u64, Question)> = Vec::with_capacity(entries.len());
            for (key, entry) in entries {
                let index: u64 = key
                    .trim()
                    .parse()
                    .map_err(|_| NormalizeError::InvalidQuestionKey { key: key.clone() })?;
                let fields = entry
                    .as_object()
                    .ok_or_else(|| NormalizeError::InvalidQuestionEntry { key: key.clone() })?;
                indexed.push((
                    index,
                    Question {
                        question: non_blank(fields.get("question")),
                        answer: non_blank(fields.get("answer")),
                        success_feedback: non_blank(fields.get("success_feedback")),
                        error_feedback: non_blank(fields.get("error_feedback")),
                    },
                ));
            }
            indexed.sort_by_key(|(index, _)| *index);
            indexed.into_iter().map(|(_, question)| question).collect()
        }
        Some(_) => return Err(NormalizeError::QuestionsNotAnObject),
    };

    Ok(ProblemDefinition {
        unshuffle: content.contains_key("unshuffle"),
        centralize: content.contains_key("centralize"),
        header: content
            .get("header")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned(),
        all_success_feedback: non_blank(content.get("all_success_feedback")),
        partial_success_feedback: non_blank(content.get("partial_success_feedback")),
        all_error_feedback: non_blank(content.get("all_error_feedback")),
        questions,
    })
}

/// A string value survives only when it has visible content; it is kept
/// verbatim, not trimmed.
fn non_blank(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_owned)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
