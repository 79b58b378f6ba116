use thiserror::Error;

/// Errors surfaced by form-document operations.
///
/// Lookups fail fast: a missing or wrongly-typed element is an error at
/// the point of use, propagated to the caller rather than recovered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormError {
    #[error("no element with id `{id}`")]
    ElementNotFound { id: String },

    #[error("element `{id}` is a {found}, expected a {expected}")]
    WrongControlKind {
        id: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("element id `{id}` already in use")]
    DuplicateId { id: String },
}
