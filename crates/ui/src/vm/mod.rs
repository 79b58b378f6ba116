mod panel_vm;
mod submission_vm;

pub use panel_vm::{PanelVm, QuestionRowVm, map_panel};
pub use submission_vm::{SubmissionVm, map_submission};
