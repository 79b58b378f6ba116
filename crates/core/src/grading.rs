//! Grading of a submitted matching assignment against its definition.

use std::collections::{HashMap, HashSet};

use crate::hash::answer_hash;
use crate::model::ProblemDefinition;

//
// ─── OUTCOME ───────────────────────────────────────────────────────────────────
//

/// Aggregate outcome over all submitted positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateOutcome {
    /// Every position matched its question's answer.
    AllCorrect,
    /// At least one position matched and at least one did not.
    Partial,
    /// No position matched.
    AllWrong,
}

/// The result of grading one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeReport {
    pub outcome: AggregateOutcome,
    /// Number of submitted positions that did not match.
    pub invalid_count: u32,
    /// The aggregate feedback configured for the outcome, when present.
    pub global_feedback: Option<String>,
    /// Per-position feedback in submission order. `None` when the problem
    /// centralizes feedback or there is nothing to show.
    pub feedbacks: Option<Vec<String>>,
}

impl GradeReport {
    /// True when every submitted position matched.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.invalid_count == 0
    }
}

//
// ─── GRADING ───────────────────────────────────────────────────────────────────
//

/// Grades `submitted` (the ordered answer hashes the student selected)
/// against `definition`.
///
/// Position `i` is correct when its hash matches the answer hash of
/// question `i`. Matching goes through a hash-to-positions set, so when
/// several questions share identical answer text, any of their positions
/// accepts that shared hash.
///
/// Submitted positions beyond the question list count as incorrect and
/// contribute empty feedback. Absent per-question feedback fields also
/// contribute empty strings.
#[must_use]
pub fn grade(definition: &ProblemDefinition, submitted: &[String]) -> GradeReport {
    let mut positions: HashMap<String, HashSet<usize>> = HashMap::new();
    for (i, question) in definition.questions.iter().enumerate() {
        positions
            .entry(answer_hash(question.answer_text()))
            .or_default()
            .insert(i);
    }

    let mut feedbacks = Vec::with_capacity(submitted.len());
    let mut invalid_count: u32 = 0;
    for (i, hash) in submitted.iter().enumerate() {
        let correct = positions.get(hash).is_some_and(|set| set.contains(&i));
        if !correct {
            invalid_count += 1;
        }
        let feedback = definition.questions.get(i).and_then(|question| {
            if correct {
                question.success_feedback.clone()
            } else {
                question.error_feedback.clone()
            }
        });
        feedbacks.push(feedback.unwrap_or_default());
    }

    let outcome = if invalid_count == 0 {
        AggregateOutcome::AllCorrect
    } else if (invalid_count as usize) < definition.questions.len() {
        AggregateOutcome::Partial
    } else {
        AggregateOutcome::AllWrong
    };

    let global_feedback = match outcome {
        AggregateOutcome::AllCorrect => definition.all_success_feedback.clone(),
        AggregateOutcome::Partial => definition.partial_success_feedback.clone(),
        AggregateOutcome::AllWrong => definition.all_error_feedback.clone(),
    };

    let feedbacks = if definition.centralize || feedbacks.is_empty() {
        None
    } else {
        Some(feedbacks)
    };

    GradeReport {
        outcome,
        invalid_count,
        global_feedback,
        feedbacks,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
