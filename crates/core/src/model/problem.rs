use serde::Deserialize;

//
// ─── PROBLEM TYPES ─────────────────────────────────────────────────────────────
//

/// One question/answer pair inside a matching problem.
///
/// All fields are optional in the stored form: an absent field means the
/// author left the corresponding input at its default, and the edit panel
/// must not overwrite that default when loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub success_feedback: Option<String>,
    #[serde(default)]
    pub error_feedback: Option<String>,
}

impl Question {
    /// Convenience constructor for a plain question/answer pair.
    #[must_use]
    pub fn pair(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
            success_feedback: None,
            error_feedback: None,
        }
    }

    /// The answer text this question expects, empty when unset.
    #[must_use]
    pub fn answer_text(&self) -> &str {
        self.answer.as_deref().unwrap_or_default()
    }
}

/// A stored matching-problem definition, as consumed from the host task.
///
/// The aggregate feedback fields correspond to the three grading outcomes:
/// every pair matched, some matched, none matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProblemDefinition {
    #[serde(default)]
    pub unshuffle: bool,
    #[serde(default)]
    pub centralize: bool,
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub all_success_feedback: Option<String>,
    #[serde(default)]
    pub partial_success_feedback: Option<String>,
    #[serde(default)]
    pub all_error_feedback: Option<String>,
    pub questions: Vec<Question>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_deserializes_with_defaults() {
        let def: ProblemDefinition = serde_json::from_str(r#"{"questions": []}"#).unwrap();
        assert!(!def.unshuffle);
        assert!(!def.centralize);
        assert_eq!(def.header, "");
        assert_eq!(def.all_success_feedback, None);
        assert_eq!(def.partial_success_feedback, None);
        assert_eq!(def.all_error_feedback, None);
        assert!(def.questions.is_empty());
    }

    #[test]
    fn definition_deserializes_full_shape() {
        let def: ProblemDefinition = serde_json::from_str(
            r#"{
                "unshuffle": true,
                "centralize": true,
                "all_success_feedback": "Well done!",
                "questions": [
                    {"question": "fr", "answer": "bonjour", "success_feedback": "oui"},
                    {"answer": "hallo"}
                ]
            }"#,
        )
        .unwrap();

        assert!(def.unshuffle);
        assert!(def.centralize);
        assert_eq!(def.all_success_feedback.as_deref(), Some("Well done!"));
        assert_eq!(def.questions.len(), 2);
        assert_eq!(def.questions[0].question.as_deref(), Some("fr"));
        assert_eq!(def.questions[0].success_feedback.as_deref(), Some("oui"));
        assert_eq!(def.questions[1].question, None);
        assert_eq!(def.questions[1].answer_text(), "hallo");
    }

    #[test]
    fn definition_requires_questions_key() {
        let result = serde_json::from_str::<ProblemDefinition>("{}");
        assert!(result.is_err());
    }
}
