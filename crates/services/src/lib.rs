#![forbid(unsafe_code)]

pub mod display_service;
pub mod editor_service;
pub mod error;
pub mod markup;
pub mod panel;
pub mod submission_service;

pub use display_service::{AnswerOption, TaskView, build_task_view};
pub use editor_service::ProblemEditor;
pub use error::EditorError;
pub use markup::{EditorMode, FeedbackSink, MarkupEditor, MarkupEditorFactory};
pub use panel::{Panel, QuestionRow};
pub use submission_service::SubmissionRenderer;
