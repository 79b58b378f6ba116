//! The problem editor: initializes a matching problem's edit panel and
//! drives per-question row creation and deletion.

use std::sync::Arc;

use tracing::{debug, info};

use form::{FormDocument, ids};
use matching_core::{ProblemDefinition, ProblemId, Question, RowId};

use crate::error::EditorError;
use crate::markup::{EditorMode, MarkupEditorFactory};
use crate::panel::Panel;

/// Orchestrates a problem panel over a form document.
///
/// The document holds control state; the returned [`Panel`] tracks rows
/// and the editor instances the factory produced. Every operation runs to
/// completion on the calling thread.
#[derive(Clone)]
pub struct ProblemEditor {
    editors: Arc<dyn MarkupEditorFactory>,
}

impl ProblemEditor {
    #[must_use]
    pub fn new(editors: Arc<dyn MarkupEditorFactory>) -> Self {
        Self { editors }
    }

    /// Initializes a clean panel from a stored problem definition.
    ///
    /// Checkboxes are set only when the corresponding flag is true; a
    /// clean panel starts unchecked, so false needs no write. Each
    /// aggregate feedback field gets an editor loaded with the stored
    /// string, or with `""` when the field is absent. Questions are
    /// created in definition order, which fixes the visual order.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::Form` when a referenced panel element is
    /// missing or of the wrong kind; nothing is caught or recovered.
    pub fn initialize(
        &self,
        doc: &mut FormDocument,
        pid: ProblemId,
        definition: &ProblemDefinition,
    ) -> Result<Panel, EditorError> {
        info!(pid = %pid, questions = definition.questions.len(), "initializing problem panel");

        if definition.unshuffle {
            doc.set_checkbox(&ids::unshuffle_checkbox(&pid), true)?;
        }
        if definition.centralize {
            doc.set_checkbox(&ids::centralize_checkbox(&pid), true)?;
        }

        let mut panel = Panel::new(pid);
        let aggregates = [
            (
                ids::all_success_feedback_mount(panel.pid()),
                definition.all_success_feedback.as_deref(),
            ),
            (
                ids::partial_success_feedback_mount(panel.pid()),
                definition.partial_success_feedback.as_deref(),
            ),
            (
                ids::all_error_feedback_mount(panel.pid()),
                definition.all_error_feedback.as_deref(),
            ),
        ];
        for (target, text) in aggregates {
            let mut editor =
                self.editors
                    .create_editor(doc, &target, EditorMode::Rst, true)?;
            editor.set_value(text.unwrap_or_default());
            panel.register_editor(target, editor);
        }

        for question in &definition.questions {
            self.create_question(doc, &mut panel, question)?;
        }

        Ok(panel)
    }

    /// Appends a question row to the panel.
    ///
    /// The display index is the smallest value whose inner row id is not
    /// taken, scanned linearly from zero; deleted indices are reused.
    /// The question/answer inputs are written only when the incoming data
    /// provides them; the rendered defaults survive otherwise. Both
    /// per-row feedback editors are created and loaded (with `""` when
    /// the field is absent).
    ///
    /// # Errors
    ///
    /// Returns `EditorError::Form` when the row cannot be added or a row
    /// element is missing.
    pub fn create_question(
        &self,
        doc: &mut FormDocument,
        panel: &mut Panel,
        data: &Question,
    ) -> Result<RowId, EditorError> {
        let pid = panel.pid().clone();
        let index = next_free_index(doc, &pid);

        let (row, controls) = form::panel::question_row(&pid, index);
        let row_elem = row.row().clone();
        let container_elem = row.container().clone();
        doc.append_row(row, controls)?;

        if let Some(text) = data.question.as_deref() {
            doc.set_text(&ids::question_text_input(&pid, index), text)?;
        }
        if let Some(text) = data.answer.as_deref() {
            doc.set_text(&ids::answer_text_input(&pid, index), text)?;
        }

        let feedbacks = [
            (
                ids::success_feedback_mount(&pid, index),
                data.success_feedback.as_deref(),
            ),
            (
                ids::error_feedback_mount(&pid, index),
                data.error_feedback.as_deref(),
            ),
        ];
        for (target, text) in feedbacks {
            let mut editor =
                self.editors
                    .create_editor(doc, &target, EditorMode::Rst, true)?;
            editor.set_value(text.unwrap_or_default());
            panel.register_editor(target, editor);
        }

        let id = panel.push_row(index, row_elem, container_elem);
        debug!(pid = %pid, index, row = %id, "created question row");
        Ok(id)
    }

    /// Removes the row at `index` from the document and the panel model.
    ///
    /// Returns whether a row existed; removing an absent index is a
    /// successful no-op. Indices are never renumbered, so a freed index
    /// is handed out again by a later [`Self::create_question`] and
    /// wrapper ids are not monotonic over a panel's lifetime.
    pub fn delete_question(&self, doc: &mut FormDocument, panel: &mut Panel, index: u32) -> bool {
        let container = ids::question_container(panel.pid(), index);
        let removed = doc.remove_row_by_container(&container);
        if removed {
            panel.remove_row_by_index(index);
            info!(pid = %panel.pid(), index, "deleted question row");
        }
        removed
    }
}

/// Smallest display index with no row in the document. Linear from zero;
/// panels hold few rows.
fn next_free_index(doc: &FormDocument, pid: &ProblemId) -> u32 {
    let mut index = 0;
    while doc.has_row_id(&ids::question_lookup(pid, index)) {
        index += 1;
    }
    index
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
