//! A preview-rendering implementation of the rich-text editor seam.
//!
//! Hosts that embed a real editor widget provide their own factory; this
//! one keeps the raw markup plus a rendered preview, which is all the
//! edit panel itself ever needs.

use form::{ElementId, FormDocument, FormError};
use services::{EditorMode, MarkupEditor, MarkupEditorFactory};

use crate::markup::{markup_to_html, unwrap_paragraph};

/// An editor instance holding raw markup and its rendered preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewEditor {
    mode: EditorMode,
    single_line: bool,
    raw: String,
    html: String,
}

impl PreviewEditor {
    #[must_use]
    pub fn new(mode: EditorMode, single_line: bool) -> Self {
        Self {
            mode,
            single_line,
            raw: String::new(),
            html: String::new(),
        }
    }

    /// The markup as last loaded.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The sanitized preview of the loaded markup.
    #[must_use]
    pub fn preview_html(&self) -> &str {
        &self.html
    }
}

impl MarkupEditor for PreviewEditor {
    fn set_value(&mut self, text: &str) {
        self.raw = text.to_owned();
        let html = markup_to_html(text, self.mode);
        self.html = if self.single_line {
            unwrap_paragraph(&html)
        } else {
            html
        };
    }
}

/// Creates [`PreviewEditor`] instances bound to mount elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewEditorFactory;

impl MarkupEditorFactory for PreviewEditorFactory {
    fn create_editor(
        &self,
        doc: &FormDocument,
        target: &ElementId,
        mode: EditorMode,
        single_line: bool,
    ) -> Result<Box<dyn MarkupEditor>, FormError> {
        doc.require_editor_mount(target)?;
        Ok(Box::new(PreviewEditor::new(mode, single_line)))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    use form::Control;

    #[test]
    fn set_value_renders_a_preview() {
        let mut editor = PreviewEditor::new(EditorMode::Rst, false);
        editor.set_value("well ``done``");
        assert_eq!(editor.raw(), "well ``done``");
        assert!(editor.preview_html().contains("<code>done</code>"));
    }

    #[test]
    fn single_line_previews_are_unwrapped() {
        let mut editor = PreviewEditor::new(EditorMode::Rst, true);
        editor.set_value("*nice*");
        assert_eq!(editor.preview_html(), "<em>nice</em>");
    }

    #[test]
    fn factory_requires_a_mount_element() {
        let mut doc = FormDocument::new();
        let mount = ElementId::new("feedback");
        let factory = PreviewEditorFactory;

        let err = factory
            .create_editor(&doc, &mount, EditorMode::Rst, true)
            .err()
            .unwrap();
        assert!(matches!(err, FormError::ElementNotFound { .. }));

        doc.insert(mount.clone(), Control::EditorMount).unwrap();
        assert!(
            factory
                .create_editor(&doc, &mount, EditorMode::Rst, true)
                .is_ok()
        );
    }

    #[test]
    fn factory_rejects_non_mount_targets() {
        let mut doc = FormDocument::new();
        let target = ElementId::new("name");
        doc.insert(target.clone(), Control::TextInput { value: String::new() })
            .unwrap();

        let err = PreviewEditorFactory
            .create_editor(&doc, &target, EditorMode::Rst, false)
            .err()
            .unwrap();
        assert!(matches!(err, FormError::WrongControlKind { .. }));
    }
}
