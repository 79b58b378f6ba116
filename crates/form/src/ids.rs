//! The published element-id scheme for a problem's form region.
//!
//! These ids are part of the widget's outward contract: the host page's
//! CSS and scripts address the same elements, so the exact strings are
//! preserved. That includes the segment-order difference between a row's
//! lookup id and its wrapper id; both are published forms.

use matching_core::ProblemId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one addressable element in a form document.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(String);

impl ElementId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({})", self.0)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Panel-level ids ───────────────────────────────────────────────────────────

/// Checkbox controlling whether displayed answers keep definition order.
#[must_use]
pub fn unshuffle_checkbox(pid: &ProblemId) -> ElementId {
    ElementId(format!("unshuffle-{pid}"))
}

/// Checkbox controlling whether feedback is centralized into one message.
#[must_use]
pub fn centralize_checkbox(pid: &ProblemId) -> ElementId {
    ElementId(format!("centralize-{pid}"))
}

/// Mount element for the everything-matched aggregate feedback editor.
#[must_use]
pub fn all_success_feedback_mount(pid: &ProblemId) -> ElementId {
    ElementId(format!("all_success_feedback-{pid}"))
}

/// Mount element for the partially-matched aggregate feedback editor.
#[must_use]
pub fn partial_success_feedback_mount(pid: &ProblemId) -> ElementId {
    ElementId(format!("partial_success_feedback-{pid}"))
}

/// Mount element for the nothing-matched aggregate feedback editor.
#[must_use]
pub fn all_error_feedback_mount(pid: &ProblemId) -> ElementId {
    ElementId(format!("all_error_feedback-{pid}"))
}

// ─── Row-level ids ─────────────────────────────────────────────────────────────

/// Inner id of a question row; the id free-index scans probe for.
#[must_use]
pub fn question_lookup(pid: &ProblemId, index: u32) -> ElementId {
    ElementId(format!("question-{pid}-{index}"))
}

/// Wrapper id of a question row; the id deletion targets.
///
/// Segment order is index-then-pid, the reverse of [`question_lookup`].
#[must_use]
pub fn question_container(pid: &ProblemId, index: u32) -> ElementId {
    ElementId(format!("question-{index}-{pid}"))
}

/// The row's question-text input.
#[must_use]
pub fn question_text_input(pid: &ProblemId, index: u32) -> ElementId {
    ElementId(format!("question-{pid}-{index}-question"))
}

/// The row's answer-text input.
#[must_use]
pub fn answer_text_input(pid: &ProblemId, index: u32) -> ElementId {
    ElementId(format!("question-{pid}-{index}-answer"))
}

/// Mount element for the row's matched-feedback editor.
#[must_use]
pub fn success_feedback_mount(pid: &ProblemId, index: u32) -> ElementId {
    ElementId(format!("question-{pid}-{index}-success_feedback"))
}

/// Mount element for the row's mismatched-feedback editor.
#[must_use]
pub fn error_feedback_mount(pid: &ProblemId, index: u32) -> ElementId {
    ElementId(format!("question-{pid}-{index}-error_feedback"))
}

// ─── Submission-review ids ─────────────────────────────────────────────────────

/// Select control holding the value submitted at ordinal `i` under `key`.
#[must_use]
pub fn submission_select(key: &str, ordinal: usize) -> ElementId {
    ElementId(format!("{key}_{ordinal}"))
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
