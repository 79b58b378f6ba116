use sha2::{Digest, Sha256};

/// Hex SHA-256 of an answer's text.
///
/// This is the value a submitted select control carries for a chosen
/// answer, and the join key grading uses to match submissions back to
/// questions. Two questions with identical answer text share a hash.
#[must_use]
pub fn answer_hash(answer: &str) -> String {
    hex::encode(Sha256::digest(answer.as_bytes()))
}
