#![forbid(unsafe_code)]

//! An explicit, typed model of the form region a matching problem edits.
//!
//! The original widget treated the host page's live DOM as its only state
//! store. This crate replaces that with an in-memory document: a flat set
//! of addressable controls plus the ordered question-row subtrees, so the
//! editor's behavior can be exercised and asserted without a UI harness.

pub mod document;
pub mod error;
pub mod ids;
pub mod panel;

pub use document::{Control, FormDocument, FormRow};
pub use error::FormError;
pub use ids::ElementId;
