use std::sync::Arc;

use services::{
    AppServices, Clock, LoadOutcome, QuizPhase, QuizRequest, QuizSession, RecordedCall,
    ScriptedBackend,
};
use study_core::model::{QuizLevel, QuizQuestion, StudyLevel};
use study_core::time::fixed_now;
use study_core::{GenerationSource, SessionStore};

fn level_set(level: QuizLevel, n: usize) -> Vec<QuizQuestion> {
    (0..n)
        .map(|i| {
            QuizQuestion::new(
                format!("{level} question {i}"),
                vec!["w".into(), "x".into(), "y".into(), "z".into()],
                i % 4,
            )
            .unwrap()
        })
        .collect()
}

#[tokio::test]
async fn three_levels_award_thirty_points() {
    let backend = ScriptedBackend::new()
        .with_quiz(level_set(QuizLevel::Easy, 3))
        .with_quiz(level_set(QuizLevel::Medium, 2))
        .with_quiz(level_set(QuizLevel::Hard, 1));
    let services = AppServices::with_backend(Arc::new(backend.clone()), Clock::fixed(fixed_now()));
    let mut store = SessionStore::new(services.clock());
    let source = GenerationSource::Profile {
        subject: "Physics".into(),
        level: StudyLevel::Beginner,
    };

    let quizzes = services.quizzes();
    let mut session = QuizSession::new();
    while !session.is_finished() {
        let outcome = quizzes.generate_level(&mut session, &source).await.unwrap();
        assert!(matches!(outcome, LoadOutcome::Loaded { .. }));
        while let Some(question) = session.current_question() {
            let correct = question.correct();
            session.answer(correct, &mut store).unwrap();
        }
        assert_eq!(session.correct_count(), session.questions().len());
        session.advance().unwrap();
    }

    assert_eq!(store.progress().value(), 30);
    let levels: Vec<QuizLevel> = backend
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            RecordedCall::Quiz(QuizRequest::Profile { level, count, .. }) => {
                assert_eq!(count, 10);
                Some(level)
            }
            _ => None,
        })
        .collect();
    assert_eq!(levels, QuizLevel::ORDER);
}

#[tokio::test]
async fn backend_failure_still_yields_a_playable_level() {
    let services = AppServices::with_backend(
        Arc::new(ScriptedBackend::new().failing()),
        Clock::fixed(fixed_now()),
    );
    let mut session = QuizSession::new();
    let source = GenerationSource::Content("notes about cells".into());

    let outcome = services
        .quizzes()
        .generate_level(&mut session, &source)
        .await
        .unwrap();

    assert_eq!(outcome, LoadOutcome::FellBack);
    assert_eq!(
        session.phase(),
        QuizPhase::AnsweringQuestion {
            level: QuizLevel::Easy,
            index: 0
        }
    );
    assert_eq!(session.questions().len(), 1);
}

#[tokio::test]
async fn content_source_uses_content_endpoint() {
    let backend = ScriptedBackend::new().with_quiz(level_set(QuizLevel::Easy, 1));
    let services = AppServices::with_backend(Arc::new(backend.clone()), Clock::fixed(fixed_now()));
    let mut session = QuizSession::new();
    let source = GenerationSource::Content("A\n\nB".into());

    services
        .quizzes()
        .generate_level(&mut session, &source)
        .await
        .unwrap();

    assert_eq!(
        backend.calls(),
        vec![RecordedCall::Quiz(QuizRequest::Content {
            content: "A\n\nB".into(),
            difficulty: QuizLevel::Easy,
            count: 10,
        })]
    );
}

#[tokio::test]
async fn superseded_request_does_not_overwrite_the_level() {
    let backend = ScriptedBackend::new()
        .with_quiz(level_set(QuizLevel::Easy, 2))
        .with_quiz(level_set(QuizLevel::Easy, 5));
    let services = AppServices::with_backend(Arc::new(backend), Clock::fixed(fixed_now()));
    let quizzes = services.quizzes();
    let source = GenerationSource::Profile {
        subject: "General".into(),
        level: StudyLevel::Beginner,
    };
    let mut session = QuizSession::new();

    let (level, first) = session.begin_generation().unwrap();
    let first_result = quizzes.fetch_level(&source, level).await;
    let (level, second) = session.begin_generation().unwrap();
    let second_result = quizzes.fetch_level(&source, level).await;

    assert_eq!(
        session.load_questions(second, second_result),
        LoadOutcome::Loaded { count: 5 }
    );
    assert_eq!(session.load_questions(first, first_result), LoadOutcome::Ignored);
    assert_eq!(session.questions().len(), 5);
}
