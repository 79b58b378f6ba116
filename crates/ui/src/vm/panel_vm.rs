//! Snapshot of an edit panel for rendering.

use form::{FormDocument, FormError, ids};
use services::Panel;

/// One question row as the host renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRowVm {
    pub index: u32,
    /// Inner element id, `question-{pid}-{index}`.
    pub row_id: String,
    /// Wrapper element id, `question-{index}-{pid}`.
    pub container_id: String,
    pub question: String,
    pub answer: String,
}

/// Render-ready snapshot of one problem's edit panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelVm {
    pub pid: String,
    pub unshuffle: bool,
    pub centralize: bool,
    pub rows: Vec<QuestionRowVm>,
}

/// Reads the panel's current state back out of the form document.
///
/// Rows come out in document order. Values are read from the document,
/// not from the definition the panel was initialized with: the document
/// is where subsequent edits land.
///
/// # Errors
///
/// Returns `FormError` when the panel's controls are missing from the
/// document, which means panel and document have diverged.
pub fn map_panel(doc: &FormDocument, panel: &Panel) -> Result<PanelVm, FormError> {
    let pid = panel.pid();
    let mut rows = Vec::with_capacity(panel.rows().len());
    for row in panel.rows() {
        rows.push(QuestionRowVm {
            index: row.index(),
            row_id: row.row_elem().to_string(),
            container_id: row.container_elem().to_string(),
            question: doc
                .text(&ids::question_text_input(pid, row.index()))?
                .to_owned(),
            answer: doc
                .text(&ids::answer_text_input(pid, row.index()))?
                .to_owned(),
        });
    }

    Ok(PanelVm {
        pid: pid.to_string(),
        unshuffle: doc.checkbox(&ids::unshuffle_checkbox(pid))?,
        centralize: doc.checkbox(&ids::centralize_checkbox(pid))?,
        rows,
    })
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use form::panel::panel_skeleton;
    use matching_core::{ProblemDefinition, ProblemId, Question};
    use services::ProblemEditor;

    use crate::editor::PreviewEditorFactory;

    #[test]
    fn panel_vm_reflects_document_state_in_document_order() {
        let editor = ProblemEditor::new(Arc::new(PreviewEditorFactory));
        let pid = ProblemId::new("mat1").unwrap();
        let mut doc = panel_skeleton(&pid);
        let mut panel = editor
            .initialize(
                &mut doc,
                pid.clone(),
                &ProblemDefinition {
                    centralize: true,
                    questions: vec![Question::pair("a", "1"), Question::pair("b", "2")],
                    ..ProblemDefinition::default()
                },
            )
            .unwrap();

        editor.delete_question(&mut doc, &mut panel, 0);
        editor
            .create_question(&mut doc, &mut panel, &Question::pair("c", "3"))
            .unwrap();

        let vm = map_panel(&doc, &panel).unwrap();
        assert_eq!(vm.pid, "mat1");
        assert!(!vm.unshuffle);
        assert!(vm.centralize);

        let rows: Vec<(u32, &str, &str)> = vm
            .rows
            .iter()
            .map(|row| (row.index, row.question.as_str(), row.container_id.as_str()))
            .collect();
        assert_eq!(
            rows,
            [(1, "b", "question-1-mat1"), (0, "c", "question-0-mat1")]
        );
    }
}
