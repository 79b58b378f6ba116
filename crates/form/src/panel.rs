//! Construction of a problem panel's controls.
//!
//! [`question_row`] is a parameterized renderer: it takes the problem id
//! and display index as typed arguments and produces the row subtree
//! directly, where the legacy markup template cloned a hidden container
//! and substituted placeholder tokens into its HTML.

use matching_core::ProblemId;

use crate::document::{Control, FormDocument, FormRow};
use crate::ids::{self, ElementId};

/// Builds the fixed controls a clean problem panel starts from: the two
/// option checkboxes (unchecked) and the three aggregate feedback editor
/// mounts. The question container starts empty; rows are appended later.
#[must_use]
pub fn panel_skeleton(pid: &ProblemId) -> FormDocument {
    let mut doc = FormDocument::new();
    let inserts = [
        (ids::unshuffle_checkbox(pid), Control::Checkbox { checked: false }),
        (ids::centralize_checkbox(pid), Control::Checkbox { checked: false }),
        (ids::all_success_feedback_mount(pid), Control::EditorMount),
        (ids::partial_success_feedback_mount(pid), Control::EditorMount),
        (ids::all_error_feedback_mount(pid), Control::EditorMount),
    ];
    for (id, control) in inserts {
        // A fresh document cannot collide with itself.
        doc.insert(id, control)
            .expect("panel skeleton ids are distinct");
    }
    doc
}

/// Renders one question row for the given problem and display index.
///
/// Returns the row subtree plus its controls, ready for
/// [`FormDocument::append_row`]. Both text inputs default to empty (an
/// incoming question that omits a field leaves that default in place)
/// and the two per-row feedback mounts start unbound.
#[must_use]
pub fn question_row(pid: &ProblemId, index: u32) -> (FormRow, Vec<(ElementId, Control)>) {
    let controls = vec![
        (
            ids::question_text_input(pid, index),
            Control::TextInput { value: String::new() },
        ),
        (
            ids::answer_text_input(pid, index),
            Control::TextInput { value: String::new() },
        ),
        (ids::success_feedback_mount(pid, index), Control::EditorMount),
        (ids::error_feedback_mount(pid, index), Control::EditorMount),
    ];
    let row = FormRow::new(
        ids::question_container(pid, index),
        ids::question_lookup(pid, index),
        controls.iter().map(|(id, _)| id.clone()).collect(),
    );
    (row, controls)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
