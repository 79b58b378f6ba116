#![forbid(unsafe_code)]

//! Presentation-facing layer: the markup preview pipeline, a concrete
//! preview implementation of the rich-text editor collaborator, and the
//! view models a host renders a panel or review region from.

pub mod editor;
pub mod markup;
pub mod vm;

pub use editor::{PreviewEditor, PreviewEditorFactory};
pub use markup::{markup_to_html, sanitize_html};
pub use vm::{PanelVm, QuestionRowVm, SubmissionVm, map_panel, map_submission};
