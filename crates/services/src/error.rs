//! Shared error types for the services crate.

use thiserror::Error;

use form::FormError;

/// Errors emitted by `ProblemEditor`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EditorError {
    #[error(transparent)]
    Form(#[from] FormError),
}
