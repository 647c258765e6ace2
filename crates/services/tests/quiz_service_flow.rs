use std::io::Write;
use std::sync::Arc;

use services::{
    FileQuestionSource, QuestionSource, QuizService, QuizServiceError, SourceError,
    StaticQuestionSource,
};
use trivia_core::model::QuestionRecord;
use trivia_core::time::{fixed_clock, fixed_now};
use trivia_core::{Advance, QuizError};

fn question(text: &str, answer: &str) -> QuestionRecord {
    QuestionRecord::new(text, vec!["A".into(), "B".into(), "C".into()], answer).unwrap()
}

fn three_questions() -> Vec<QuestionRecord> {
    vec![
        question("Q1", "A"),
        question("Q2", "B"),
        question("Q3", "C"),
    ]
}

#[tokio::test]
async fn full_run_scores_and_completes() {
    let source: Arc<dyn QuestionSource> = Arc::new(StaticQuestionSource::new(three_questions()));
    let mut clock = fixed_clock();
    let service = QuizService::new(clock, source);

    let mut attempt = service.start().await.unwrap();
    assert_eq!(attempt.started_at(), fixed_now());

    for pick in 0..3 {
        let session = attempt.session_mut();
        session.select_choice(pick).unwrap();
        assert!(session.submit().unwrap().is_correct());
        let step = session.advance().unwrap();
        if pick == 2 {
            assert_eq!(step, Advance::Complete);
        }
    }

    clock.advance(chrono::Duration::seconds(90));
    let summary = attempt.summary(&clock).unwrap();
    assert_eq!(summary.correct(), 3);
    assert_eq!(summary.total(), 3);
    assert_eq!(summary.elapsed().num_seconds(), 90);
}

#[tokio::test]
async fn limit_truncates_question_list() {
    let source: Arc<dyn QuestionSource> = Arc::new(StaticQuestionSource::new(three_questions()));
    let service = QuizService::new(fixed_clock(), source).with_limit(Some(2));

    let attempt = service.start().await.unwrap();
    let texts: Vec<_> = attempt
        .session()
        .questions()
        .iter()
        .map(QuestionRecord::question)
        .collect();
    assert_eq!(texts, ["Q1", "Q2"]);
}

#[tokio::test]
async fn zero_limit_cannot_start() {
    let source: Arc<dyn QuestionSource> = Arc::new(StaticQuestionSource::new(three_questions()));
    let service = QuizService::new(fixed_clock(), source).with_limit(Some(0));

    let err = service.start().await.unwrap_err();
    assert!(matches!(err, QuizServiceError::Quiz(QuizError::Empty)));
}

#[tokio::test]
async fn shuffle_keeps_the_same_questions() {
    let source: Arc<dyn QuestionSource> = Arc::new(StaticQuestionSource::new(three_questions()));
    let service = QuizService::new(fixed_clock(), source).with_shuffle(true);

    let attempt = service.start().await.unwrap();
    let mut texts: Vec<_> = attempt
        .session()
        .questions()
        .iter()
        .map(|q| q.question().to_string())
        .collect();
    texts.sort();
    assert_eq!(texts, ["Q1", "Q2", "Q3"]);
}

#[tokio::test]
async fn empty_source_is_a_fetch_failure() {
    let source: Arc<dyn QuestionSource> = Arc::new(StaticQuestionSource::default());
    let service = QuizService::new(fixed_clock(), source);

    let err = service.start().await.unwrap_err();
    assert!(matches!(err, QuizServiceError::Fetch(SourceError::Empty)));
}

#[tokio::test]
async fn file_source_reads_json_payload() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"question": "Capital of France?", "answer": "Paris", "choices": ["Paris", "Lyon"], "category": "world"}}]"#
    )
    .unwrap();

    let source = FileQuestionSource::new(file.path());
    let questions = source.fetch().await.unwrap();

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].answer(), "Paris");
    assert_eq!(questions[0].category(), Some("world"));
}

#[tokio::test]
async fn missing_file_is_an_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileQuestionSource::new(dir.path().join("absent.json"));

    assert!(matches!(source.fetch().await, Err(SourceError::Io(_))));
}

#[tokio::test]
async fn bundled_demo_questions_decode() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/questions.json");
    let questions = FileQuestionSource::new(path).fetch().await.unwrap();

    assert_eq!(questions.len(), 3);
    assert!(questions.iter().all(|q| q.category() == Some("world")));
}
