use thiserror::Error;

use crate::model::IdError;
use crate::normalize::NormalizeError;

/// Umbrella error for the domain crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Id(#[from] IdError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}
