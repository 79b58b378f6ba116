use form::{Control, FormDocument, ids};
use matching_core::{
    AggregateOutcome, ProblemDefinition, ProblemId, Question, SubmissionPayload, answer_hash, grade,
};
use services::{FeedbackSink, SubmissionRenderer, build_task_view};

fn definition() -> ProblemDefinition {
    ProblemDefinition {
        all_success_feedback: Some("perfect".into()),
        partial_success_feedback: Some("almost".into()),
        all_error_feedback: Some("review the lesson".into()),
        questions: vec![
            Question {
                success_feedback: Some("fr ok".into()),
                error_feedback: Some("fr wrong".into()),
                ..Question::pair("hello (fr)", "bonjour")
            },
            Question {
                success_feedback: Some("de ok".into()),
                error_feedback: Some("de wrong".into()),
                ..Question::pair("hello (de)", "hallo")
            },
        ],
        ..ProblemDefinition::default()
    }
}

fn review_doc(key: &str, count: usize) -> FormDocument {
    let mut doc = FormDocument::new();
    for ordinal in 0..count {
        doc.insert(
            ids::submission_select(key, ordinal),
            Control::Select { value: String::new() },
        )
        .expect("distinct select ids");
    }
    doc
}

#[test]
fn submission_flow_display_grade_and_review() {
    let definition = definition();
    let pid = ProblemId::new("mat1").expect("valid pid");

    // The student sees the task view and picks the right answer per row.
    let view = build_task_view(&definition, &pid, "en", 3);
    assert_eq!(view.answers.len(), 2);
    let submitted: Vec<String> = definition
        .questions
        .iter()
        .map(|q| answer_hash(q.answer_text()))
        .collect();

    // Grading recognizes the full match and picks the aggregate feedback.
    let report = grade(&definition, &submitted);
    assert!(report.is_valid());
    assert_eq!(report.outcome, AggregateOutcome::AllCorrect);
    assert_eq!(report.global_feedback.as_deref(), Some("perfect"));
    assert_eq!(
        report.feedbacks,
        Some(vec!["fr ok".to_string(), "de ok".to_string()])
    );

    // At review time the stored payload is projected back onto selects.
    let mut payload = SubmissionPayload::new();
    payload.insert("mat1", submitted.clone());
    let mut doc = review_doc("mat1", 2);
    SubmissionRenderer::new().load_input(&mut doc, "sub1", "mat1", &payload);

    assert_eq!(
        doc.select(&ids::submission_select("mat1", 0)).unwrap(),
        submitted[0]
    );
    assert_eq!(
        doc.select(&ids::submission_select("mat1", 1)).unwrap(),
        submitted[1]
    );
}

#[test]
fn review_with_a_missing_key_leaves_the_region_untouched() {
    let mut doc = review_doc("mat1", 2);
    SubmissionRenderer::new().load_input(&mut doc, "sub1", "other", &SubmissionPayload::new());
    assert_eq!(doc.select(&ids::submission_select("mat1", 0)).unwrap(), "");
    assert_eq!(doc.select(&ids::submission_select("mat1", 1)).unwrap(), "");
}

#[test]
fn feedback_content_reaches_the_host_loader_unchanged() {
    struct Recorder(Vec<(String, String)>);
    impl FeedbackSink for Recorder {
        fn load_feedback(&mut self, key: &str, content: &str) {
            self.0.push((key.to_owned(), content.to_owned()));
        }
    }

    let definition = definition();
    let wrong = vec![answer_hash("nope"), answer_hash("nope")];
    let report = grade(&definition, &wrong);
    assert_eq!(report.outcome, AggregateOutcome::AllWrong);

    let mut sink = Recorder(Vec::new());
    let renderer = SubmissionRenderer::new();
    if let Some(global) = report.global_feedback.as_deref() {
        renderer.load_feedback(&mut sink, "mat1", global);
    }
    assert_eq!(
        sink.0,
        [("mat1".to_owned(), "review the lesson".to_owned())]
    );
}
