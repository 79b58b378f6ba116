//! The in-memory model of one problem's edit panel.

use std::collections::HashMap;

use form::ElementId;
use matching_core::{ProblemId, RowId};

use crate::markup::MarkupEditor;

/// One question row as the panel tracks it.
///
/// `id` is stable for the life of the panel session. `index` is the
/// display index baked into the row's element ids; it is freed when the
/// row is deleted and the smallest free value is handed out again on the
/// next creation, so indices alone do not identify a row over time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRow {
    id: RowId,
    index: u32,
    row_elem: ElementId,
    container_elem: ElementId,
}

impl QuestionRow {
    #[must_use]
    pub fn id(&self) -> RowId {
        self.id
    }

    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The row's inner element id (`question-{pid}-{index}`).
    #[must_use]
    pub fn row_elem(&self) -> &ElementId {
        &self.row_elem
    }

    /// The row's wrapper element id (`question-{index}-{pid}`).
    #[must_use]
    pub fn container_elem(&self) -> &ElementId {
        &self.container_elem
    }
}

/// Model of one problem's edit panel: its rows in document order plus the
/// editor instances bound into it.
pub struct Panel {
    pid: ProblemId,
    next_row_id: u64,
    rows: Vec<QuestionRow>,
    editors: HashMap<ElementId, Box<dyn MarkupEditor>>,
}

impl Panel {
    #[must_use]
    pub fn new(pid: ProblemId) -> Self {
        Self {
            pid,
            next_row_id: 0,
            rows: Vec::new(),
            editors: HashMap::new(),
        }
    }

    #[must_use]
    pub fn pid(&self) -> &ProblemId {
        &self.pid
    }

    /// Rows in document order (creation order; deletion keeps the rest in
    /// place).
    #[must_use]
    pub fn rows(&self) -> &[QuestionRow] {
        &self.rows
    }

    #[must_use]
    pub fn row_by_index(&self, index: u32) -> Option<&QuestionRow> {
        self.rows.iter().find(|row| row.index() == index)
    }

    /// Records a newly created row and returns its stable id.
    pub(crate) fn push_row(
        &mut self,
        index: u32,
        row_elem: ElementId,
        container_elem: ElementId,
    ) -> RowId {
        let id = RowId::new(self.next_row_id);
        self.next_row_id += 1;
        self.rows.push(QuestionRow {
            id,
            index,
            row_elem,
            container_elem,
        });
        id
    }

    /// Forgets the row at `index`, freeing that display index.
    pub(crate) fn remove_row_by_index(&mut self, index: u32) {
        self.rows.retain(|row| row.index() != index);
    }

    /// Binds an editor instance to a mount element. Editors for deleted
    /// rows stay registered: the instance is detached, not destroyed.
    pub(crate) fn register_editor(&mut self, target: ElementId, editor: Box<dyn MarkupEditor>) {
        self.editors.insert(target, editor);
    }

    #[must_use]
    pub fn has_editor(&self, target: &ElementId) -> bool {
        self.editors.contains_key(target)
    }

    #[must_use]
    pub fn editor_mut(&mut self, target: &ElementId) -> Option<&mut (dyn MarkupEditor + 'static)> {
        self.editors.get_mut(target).map(move |editor| &mut **editor)
    }
}

impl std::fmt::Debug for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Panel")
            .field("pid", &self.pid)
            .field("rows", &self.rows)
            .field("editors", &self.editors.len())
            .finish()
    }
}
