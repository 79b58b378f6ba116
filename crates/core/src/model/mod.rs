mod ids;
mod problem;
mod submission;

pub use ids::{IdError, ProblemId, RowId};
pub use problem::{ProblemDefinition, Question};
pub use submission::SubmissionPayload;
