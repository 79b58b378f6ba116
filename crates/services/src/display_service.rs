//! Builds the student-facing view of a matching problem: the ordered
//! questions plus the answer list the select controls offer.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use sha2::{Digest, Sha256};

use matching_core::{ProblemDefinition, ProblemId, Question, answer_hash};

/// One entry of the answer list offered to the student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    /// The answer text as displayed.
    pub text: String,
    /// The value the select control submits for this answer.
    pub hash: String,
}

/// The render-ready view of one matching problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub pid: ProblemId,
    /// Header markup shown above the question list.
    pub header: String,
    /// Questions in definition order.
    pub questions: Vec<Question>,
    /// Answer options, shuffled unless the problem opts out.
    pub answers: Vec<AnswerOption>,
}

/// Builds the task view for one problem.
///
/// Unless `unshuffle` is set, the answer list is shuffled with a
/// generator seeded from the `(pid, language, seed)` triple, so the same
/// student sees the same order on every render while different problems
/// and attempts differ.
#[must_use]
pub fn build_task_view(
    definition: &ProblemDefinition,
    pid: &ProblemId,
    language: &str,
    seed: u64,
) -> TaskView {
    let mut answers: Vec<AnswerOption> = definition
        .questions
        .iter()
        .map(|question| {
            let text = question.answer_text().to_owned();
            AnswerOption {
                hash: answer_hash(&text),
                text,
            }
        })
        .collect();

    if !definition.unshuffle {
        let digest: [u8; 32] = Sha256::digest(format!("{pid}#{language}#{seed}").as_bytes()).into();
        let mut rng = StdRng::from_seed(digest);
        answers.shuffle(&mut rng);
    }

    TaskView {
        pid: pid.clone(),
        header: definition.header.clone(),
        questions: definition.questions.clone(),
        answers,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
