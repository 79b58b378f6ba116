//! Collaborator seams for the rich-text editor widget and the host's
//! generic feedback loader. Both are external to this layer; the editor
//! panel drives them through these traits only.

use form::{ElementId, FormDocument, FormError};

/// Markup dialect an editor instance is configured for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
    /// reStructuredText-style markup; the dialect the edit panel uses.
    Rst,
    Markdown,
}

/// A live rich-text editor instance bound to one mount element.
///
/// The edit panel only ever writes content into editors; reading values
/// back is the host's concern at save time.
pub trait MarkupEditor {
    /// Replaces the editor's displayed content.
    fn set_value(&mut self, text: &str);
}

/// Creates editor instances bound to mount elements in a form document.
pub trait MarkupEditorFactory {
    /// Creates an editor bound to `target`.
    ///
    /// # Errors
    ///
    /// Implementations must return `FormError::ElementNotFound` (or
    /// `WrongControlKind`) when `target` is not an editor mount in `doc`;
    /// a malformed panel fails at the point of use.
    fn create_editor(
        &self,
        doc: &FormDocument,
        target: &ElementId,
        mode: EditorMode,
        single_line: bool,
    ) -> Result<Box<dyn MarkupEditor>, FormError>;
}

/// The host's generic feedback loader; opaque to this layer.
pub trait FeedbackSink {
    fn load_feedback(&mut self, key: &str, content: &str);
}
