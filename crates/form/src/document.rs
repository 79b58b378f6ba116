//! The in-memory form document and its typed controls.

use std::collections::HashMap;

use crate::error::FormError;
use crate::ids::ElementId;

//
// ─── CONTROLS ──────────────────────────────────────────────────────────────────
//

/// One addressable control in a form document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Checkbox { checked: bool },
    TextInput { value: String },
    Select { value: String },
    /// Anchor element a rich-text editor instance binds to. The editor
    /// owns its content; the document only records the mount point.
    EditorMount,
}

impl Control {
    fn kind(&self) -> &'static str {
        match self {
            Control::Checkbox { .. } => "checkbox",
            Control::TextInput { .. } => "text input",
            Control::Select { .. } => "select",
            Control::EditorMount => "editor mount",
        }
    }
}

//
// ─── ROWS ──────────────────────────────────────────────────────────────────────
//

/// One question-row subtree: the wrapper element, the inner row element,
/// and the controls the row owns. Removing the row removes its controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    container: ElementId,
    row: ElementId,
    controls: Vec<ElementId>,
}

impl FormRow {
    #[must_use]
    pub fn new(container: ElementId, row: ElementId, controls: Vec<ElementId>) -> Self {
        Self {
            container,
            row,
            controls,
        }
    }

    /// The wrapper element's id; deletion addresses rows by this.
    #[must_use]
    pub fn container(&self) -> &ElementId {
        &self.container
    }

    /// The inner row element's id; free-index scans probe for this.
    #[must_use]
    pub fn row(&self) -> &ElementId {
        &self.row
    }

    /// Ids of the controls the row owns.
    #[must_use]
    pub fn controls(&self) -> &[ElementId] {
        &self.controls
    }
}

//
// ─── DOCUMENT ──────────────────────────────────────────────────────────────────
//

/// The form region a single problem edits.
///
/// Mutation is synchronous and single-threaded; the last write to a
/// control wins. Question rows keep document order: appending is the only
/// way in, so creation order is visual order.
#[derive(Debug, Default)]
pub struct FormDocument {
    controls: HashMap<ElementId, Control>,
    rows: Vec<FormRow>,
}

impl FormDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a free-standing control to the document.
    ///
    /// # Errors
    ///
    /// Returns `FormError::DuplicateId` if the id is already taken.
    pub fn insert(&mut self, id: ElementId, control: Control) -> Result<(), FormError> {
        if self.controls.contains_key(&id) || self.has_row_id(&id) {
            return Err(FormError::DuplicateId { id: id.to_string() });
        }
        self.controls.insert(id, control);
        Ok(())
    }

    /// Returns the control registered under `id`, if any.
    #[must_use]
    pub fn control(&self, id: &ElementId) -> Option<&Control> {
        self.controls.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.controls.contains_key(id)
    }

    // ─── Typed accessors ───────────────────────────────────────────────────────

    /// Sets a checkbox's checked state.
    ///
    /// # Errors
    ///
    /// Returns `FormError::ElementNotFound` / `WrongControlKind`.
    pub fn set_checkbox(&mut self, id: &ElementId, checked: bool) -> Result<(), FormError> {
        match self.control_mut(id)? {
            Control::Checkbox { checked: current } => {
                *current = checked;
                Ok(())
            }
            other => Err(wrong_kind(id, "checkbox", other)),
        }
    }

    /// Reads a checkbox's checked state.
    ///
    /// # Errors
    ///
    /// Returns `FormError::ElementNotFound` / `WrongControlKind`.
    pub fn checkbox(&self, id: &ElementId) -> Result<bool, FormError> {
        match self.control_ref(id)? {
            Control::Checkbox { checked } => Ok(*checked),
            other => Err(wrong_kind(id, "checkbox", other)),
        }
    }

    /// Sets a text input's value.
    ///
    /// # Errors
    ///
    /// Returns `FormError::ElementNotFound` / `WrongControlKind`.
    pub fn set_text(&mut self, id: &ElementId, value: impl Into<String>) -> Result<(), FormError> {
        match self.control_mut(id)? {
            Control::TextInput { value: current } => {
                *current = value.into();
                Ok(())
            }
            other => Err(wrong_kind(id, "text input", other)),
        }
    }

    /// Reads a text input's value.
    ///
    /// # Errors
    ///
    /// Returns `FormError::ElementNotFound` / `WrongControlKind`.
    pub fn text(&self, id: &ElementId) -> Result<&str, FormError> {
        match self.control_ref(id)? {
            Control::TextInput { value } => Ok(value),
            other => Err(wrong_kind(id, "text input", other)),
        }
    }

    /// Sets a select's value.
    ///
    /// # Errors
    ///
    /// Returns `FormError::ElementNotFound` / `WrongControlKind`.
    pub fn set_select(&mut self, id: &ElementId, value: impl Into<String>) -> Result<(), FormError> {
        match self.control_mut(id)? {
            Control::Select { value: current } => {
                *current = value.into();
                Ok(())
            }
            other => Err(wrong_kind(id, "select", other)),
        }
    }

    /// Reads a select's value.
    ///
    /// # Errors
    ///
    /// Returns `FormError::ElementNotFound` / `WrongControlKind`.
    pub fn select(&self, id: &ElementId) -> Result<&str, FormError> {
        match self.control_ref(id)? {
            Control::Select { value } => Ok(value),
            other => Err(wrong_kind(id, "select", other)),
        }
    }

    /// Sets a select's value only when such a select exists; returns
    /// whether anything was written. The one deliberately silent mutator:
    /// projecting a stored submission drops values with no matching
    /// control instead of failing.
    pub fn set_select_if_present(&mut self, id: &ElementId, value: impl Into<String>) -> bool {
        match self.controls.get_mut(id) {
            Some(Control::Select { value: current }) => {
                *current = value.into();
                true
            }
            _ => false,
        }
    }

    /// Confirms `id` names an editor mount.
    ///
    /// # Errors
    ///
    /// Returns `FormError::ElementNotFound` / `WrongControlKind`.
    pub fn require_editor_mount(&self, id: &ElementId) -> Result<(), FormError> {
        match self.control_ref(id)? {
            Control::EditorMount => Ok(()),
            other => Err(wrong_kind(id, "editor mount", other)),
        }
    }

    // ─── Rows ──────────────────────────────────────────────────────────────────

    /// Appends a question row and registers its controls.
    ///
    /// # Errors
    ///
    /// Returns `FormError::DuplicateId` if any row or control id is taken.
    pub fn append_row(
        &mut self,
        row: FormRow,
        controls: Vec<(ElementId, Control)>,
    ) -> Result<(), FormError> {
        for id in [row.container(), row.row()] {
            if self.controls.contains_key(id) || self.has_row_id(id) || self.has_container_id(id) {
                return Err(FormError::DuplicateId { id: id.to_string() });
            }
        }
        for (id, _) in &controls {
            if self.controls.contains_key(id) {
                return Err(FormError::DuplicateId { id: id.to_string() });
            }
        }
        for (id, control) in controls {
            self.controls.insert(id, control);
        }
        self.rows.push(row);
        Ok(())
    }

    /// Removes the row whose wrapper id is `container`, along with its
    /// controls. Returns whether a row was removed; removing an absent
    /// row is a successful no-op.
    pub fn remove_row_by_container(&mut self, container: &ElementId) -> bool {
        let Some(position) = self
            .rows
            .iter()
            .position(|row| row.container() == container)
        else {
            return false;
        };
        let row = self.rows.remove(position);
        for id in row.controls() {
            self.controls.remove(id);
        }
        true
    }

    /// True when a row with the given inner id exists.
    #[must_use]
    pub fn has_row_id(&self, row_id: &ElementId) -> bool {
        self.rows.iter().any(|row| row.row() == row_id)
    }

    /// True when a row with the given wrapper id exists.
    #[must_use]
    pub fn has_container_id(&self, container: &ElementId) -> bool {
        self.rows.iter().any(|row| row.container() == container)
    }

    /// The question rows in document order.
    #[must_use]
    pub fn rows(&self) -> &[FormRow] {
        &self.rows
    }

    // ─── Internal ──────────────────────────────────────────────────────────────

    fn control_ref(&self, id: &ElementId) -> Result<&Control, FormError> {
        self.controls
            .get(id)
            .ok_or_else(|| FormError::ElementNotFound { id: id.to_string() })
    }

    fn control_mut(&mut self, id: &ElementId) -> Result<&mut Control, FormError> {
        self.controls
            .get_mut(id)
            .ok_or_else(|| FormError::ElementNotFound { id: id.to_string() })
    }
}

fn wrong_kind(id: &ElementId, expected: &'static str, found: &Control) -> FormError {
    FormError::WrongControlKind {
        id: id.to_string(),
        expected,
        found: found.kind(),
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ElementId {
        ElementId::new(s)
    }

    #[test]
    fn typed_accessors_roundtrip() {
        let mut doc = FormDocument::new();
        doc.insert(id("flag"), Control::Checkbox { checked: false })
            .unwrap();
        doc.insert(id("name"), Control::TextInput { value: String::new() })
            .unwrap();
        doc.insert(id("pick"), Control::Select { value: String::new() })
            .unwrap();

        doc.set_checkbox(&id("flag"), true).unwrap();
        doc.set_text(&id("name"), "bonjour").unwrap();
        doc.set_select(&id("pick"), "a").unwrap();

        assert!(doc.checkbox(&id("flag")).unwrap());
        assert_eq!(doc.text(&id("name")).unwrap(), "bonjour");
        assert_eq!(doc.select(&id("pick")).unwrap(), "a");
    }

    #[test]
    fn missing_elements_fail_fast() {
        let mut doc = FormDocument::new();
        assert_eq!(
            doc.set_checkbox(&id("nope"), true).unwrap_err(),
            FormError::ElementNotFound { id: "nope".into() }
        );
        assert_eq!(
            doc.text(&id("nope")).unwrap_err(),
            FormError::ElementNotFound { id: "nope".into() }
        );
    }

    #[test]
    fn kind_mismatch_fails_fast() {
        let mut doc = FormDocument::new();
        doc.insert(id("flag"), Control::Checkbox { checked: false })
            .unwrap();
        assert_eq!(
            doc.set_text(&id("flag"), "x").unwrap_err(),
            FormError::WrongControlKind {
                id: "flag".into(),
                expected: "text input",
                found: "checkbox"
            }
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut doc = FormDocument::new();
        doc.insert(id("a"), Control::EditorMount).unwrap();
        assert_eq!(
            doc.insert(id("a"), Control::EditorMount).unwrap_err(),
            FormError::DuplicateId { id: "a".into() }
        );
    }

    #[test]
    fn set_select_if_present_is_silent_on_misses() {
        let mut doc = FormDocument::new();
        doc.insert(id("pick"), Control::Select { value: String::new() })
            .unwrap();
        doc.insert(id("name"), Control::TextInput { value: String::new() })
            .unwrap();

        assert!(doc.set_select_if_present(&id("pick"), "a"));
        assert!(!doc.set_select_if_present(&id("missing"), "b"));
        // A non-select element under the id matches nothing, same as missing.
        assert!(!doc.set_select_if_present(&id("name"), "c"));
        assert_eq!(doc.select(&id("pick")).unwrap(), "a");
        assert_eq!(doc.text(&id("name")).unwrap(), "");
    }

    #[test]
    fn rows_keep_document_order_and_own_their_controls() {
        let mut doc = FormDocument::new();
        let row = |n: &str| {
            FormRow::new(
                id(&format!("wrap-{n}")),
                id(&format!("row-{n}")),
                vec![id(&format!("input-{n}"))],
            )
        };
        doc.append_row(
            row("a"),
            vec![(id("input-a"), Control::TextInput { value: String::new() })],
        )
        .unwrap();
        doc.append_row(
            row("b"),
            vec![(id("input-b"), Control::TextInput { value: String::new() })],
        )
        .unwrap();

        let order: Vec<_> = doc.rows().iter().map(|r| r.row().as_str().to_owned()).collect();
        assert_eq!(order, ["row-a", "row-b"]);
        assert!(doc.has_row_id(&id("row-a")));
        assert!(doc.has_container_id(&id("wrap-b")));

        assert!(doc.remove_row_by_container(&id("wrap-a")));
        assert!(!doc.has_row_id(&id("row-a")));
        assert!(!doc.contains(&id("input-a")));
        assert!(doc.contains(&id("input-b")));

        // Removing an absent row changes nothing.
        assert!(!doc.remove_row_by_container(&id("wrap-a")));
        assert_eq!(doc.rows().len(), 1);
    }
}
