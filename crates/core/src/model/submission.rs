use serde::Deserialize;
use std::collections::HashMap;

/// A submitted answer payload: field key to the ordered list of values the
/// student selected, in select-control order.
///
/// For matching problems the values are answer hashes (see
/// [`crate::hash::answer_hash`]); the payload itself is opaque ordered data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmissionPayload(HashMap<String, Vec<String>>);

impl SubmissionPayload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ordered values recorded under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Records the ordered values for `key`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.0.insert(key.into(), values);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_deserializes_from_json_map() {
        let payload: SubmissionPayload =
            serde_json::from_str(r#"{"q1": ["a", "b"], "q2": []}"#).unwrap();
        assert_eq!(payload.get("q1"), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(payload.get("q2"), Some(&[][..]));
        assert_eq!(payload.get("missing"), None);
    }

    #[test]
    fn insert_replaces_previous_values() {
        let mut payload = SubmissionPayload::new();
        payload.insert("q1", vec!["a".into()]);
        payload.insert("q1", vec!["b".into()]);
        assert_eq!(payload.get("q1"), Some(&["b".to_string()][..]));
    }
}
