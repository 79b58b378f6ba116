//! The submission renderer: projects a stored answer payload back onto
//! the select controls of a review form region.

use tracing::debug;

use form::{FormDocument, ids};
use matching_core::SubmissionPayload;

use crate::markup::FeedbackSink;

/// Restores review-time form state from a stored submission.
///
/// Both operations are infallible by contract: feedback loading is a
/// verbatim delegation, and input projection silently drops values that
/// have no matching select control.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionRenderer;

impl SubmissionRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hands feedback content to the host's generic loader, verbatim.
    pub fn load_feedback(&self, sink: &mut dyn FeedbackSink, key: &str, content: &str) {
        sink.load_feedback(key, content);
    }

    /// Sets select `{key}_{i}` to the value at ordinal `i` of the
    /// payload's entry for `key`.
    ///
    /// A payload without the key mutates nothing. Values beyond the
    /// controls that exist are dropped; controls beyond the supplied
    /// values keep their defaults.
    pub fn load_input(
        &self,
        doc: &mut FormDocument,
        submission_id: &str,
        key: &str,
        payload: &SubmissionPayload,
    ) {
        let Some(values) = payload.get(key) else {
            return;
        };
        for (ordinal, value) in values.iter().enumerate() {
            let target = ids::submission_select(key, ordinal);
            if !doc.set_select_if_present(&target, value.as_str()) {
                debug!(submission_id, %target, "no select control for submitted value");
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
