//! Snapshot of a submission review region.

use form::{Control, FormDocument, ids};

/// The select states recorded under one field key, in ordinal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionVm {
    pub key: String,
    pub selections: Vec<String>,
}

/// Collects the contiguous run of `{key}_{0..}` selects from the review
/// region. The run ends at the first ordinal with no select control.
#[must_use]
pub fn map_submission(doc: &FormDocument, key: &str) -> SubmissionVm {
    let mut selections = Vec::new();
    let mut ordinal = 0;
    while let Some(Control::Select { value }) = doc.control(&ids::submission_select(key, ordinal)) {
        selections.push(value.clone());
        ordinal += 1;
    }
    SubmissionVm {
        key: key.to_owned(),
        selections,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
