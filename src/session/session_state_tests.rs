//! Tests for query session state

use super::*;
use crate::test_utils::test_helpers::log_capture;
use proptest::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver};

fn connected_session() -> (QuerySession, UnboundedReceiver<WorkerRequest>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut session = QuerySession::new();
    session.set_channel(tx);
    (session, rx)
}

fn response(answer: &str, confidence: &str, sources: serde_json::Value) -> AskResponse {
    serde_json::from_value(serde_json::json!({
        "answer": answer,
        "confidence": confidence,
        "sources": sources,
    }))
    .unwrap()
}

fn submitted_id(outcome: SubmitOutcome) -> u64 {
    match outcome {
        SubmitOutcome::Submitted { request_id } => request_id,
        other => panic!("Expected submission, got {:?}", other),
    }
}

#[test]
fn test_new_session_is_idle_and_empty() {
    let session = QuerySession::new();
    assert!(!session.is_busy());
    assert!(session.last_answer().is_none());
    assert!(session.last_confidence().is_none());
    assert!(session.last_sources().is_empty());
    assert!(session.last_question().is_none());
}

#[test]
fn test_submit_sets_busy_and_sends_one_request() {
    let (mut session, mut rx) = connected_session();

    let request_id = submitted_id(session.submit("Does candidate X know Rust?"));

    assert!(session.is_busy());
    assert_eq!(session.pending_question(), Some("Does candidate X know Rust?"));
    match rx.try_recv().unwrap() {
        WorkerRequest::Ask {
            question,
            request_id: sent_id,
        } => {
            assert_eq!(question, "Does candidate X know Rust?");
            assert_eq!(sent_id, request_id);
        }
        other => panic!("Expected Ask, got {:?}", other),
    }
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_submit_trims_question() {
    let (mut session, mut rx) = connected_session();
    session.submit("  Who has worked remotely?  \n");
    assert!(matches!(
        rx.try_recv().unwrap(),
        WorkerRequest::Ask { question, .. } if question == "Who has worked remotely?"
    ));
}

#[test]
fn test_submit_blank_question_is_rejected() {
    let (mut session, mut rx) = connected_session();
    assert_eq!(session.submit("   "), SubmitOutcome::Empty);
    assert!(!session.is_busy());
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_submit_while_busy_is_noop() {
    let (mut session, mut rx) = connected_session();
    session.submit("first");
    let _ = rx.try_recv();

    assert_eq!(session.submit("second"), SubmitOutcome::Busy);
    assert_eq!(session.pending_question(), Some("first"));
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_submit_without_channel_is_disconnected() {
    let mut session = QuerySession::new();
    assert_eq!(session.submit("q"), SubmitOutcome::Disconnected);
    assert!(!session.is_busy());
}

#[test]
fn test_submit_with_closed_channel_is_disconnected() {
    let (mut session, rx) = connected_session();
    drop(rx);
    assert_eq!(session.submit("q"), SubmitOutcome::Disconnected);
    assert!(!session.is_busy());
}

#[test]
fn test_submit_keeps_previous_answer_visible() {
    let (mut session, _rx) = connected_session();
    let id = submitted_id(session.submit("first"));
    session.settle(id, Ok(response("Old answer", "Medium", serde_json::json!([]))));

    session.submit("second");

    assert!(session.is_busy());
    assert_eq!(session.last_answer(), Some("Old answer"));
    assert_eq!(session.last_confidence(), Some("Medium"));
    assert_eq!(session.last_question(), Some("first"));
}

#[test]
fn test_settle_success_replaces_answer_and_clears_busy() {
    let (mut session, _rx) = connected_session();
    let id = submitted_id(session.submit("Does candidate X know Rust?"));

    let outcome = session.settle(
        id,
        Ok(response(
            "Yes",
            "High",
            serde_json::json!(["cv_x.pdf", {"source": "cv_x.pdf", "page": 2}]),
        )),
    );

    assert_eq!(outcome, SettleOutcome::Answered);
    assert!(!session.is_busy());
    assert_eq!(session.last_answer(), Some("Yes"));
    let answer = session.answer().unwrap();
    assert_eq!(answer.tier(), crate::session::ConfidenceTier::Strong);
    assert_eq!(answer.source_labels(), vec!["cv_x.pdf", "cv_x.pdf"]);
    assert_eq!(session.last_question(), Some("Does candidate X know Rust?"));
}

#[test]
fn test_settle_failure_clears_busy_and_keeps_answer() {
    let (mut session, _rx) = connected_session();
    let first = submitted_id(session.submit("first"));
    session.settle(
        first,
        Ok(response("Kept", "Low", serde_json::json!(["a.pdf"]))),
    );

    let second = submitted_id(session.submit("second"));
    let error = ServiceError::Network("connection refused".to_string());
    let outcome = session.settle(second, Err(error.clone()));

    assert_eq!(outcome, SettleOutcome::Failed(error));
    assert!(!session.is_busy());
    assert_eq!(session.last_answer(), Some("Kept"));
    assert_eq!(session.last_confidence(), Some("Low"));
    assert_eq!(session.last_sources().len(), 1);
    assert_eq!(session.last_question(), Some("first"));
}

#[test]
fn test_settle_after_failure_allows_new_submission() {
    let (mut session, mut rx) = connected_session();
    let id = submitted_id(session.submit("q1"));
    session.settle(id, Err(ServiceError::Parse("bad".to_string())));
    let _ = rx.try_recv();

    assert!(matches!(session.submit("q2"), SubmitOutcome::Submitted { .. }));
    assert!(rx.try_recv().is_ok());
}

#[test]
fn test_settle_with_unknown_request_id_is_ignored() {
    let (mut session, _rx) = connected_session();
    let id = submitted_id(session.submit("q"));

    let outcome = session.settle(id + 7, Ok(response("x", "High", serde_json::json!([]))));

    assert_eq!(outcome, SettleOutcome::Ignored);
    assert!(session.is_busy());
    assert!(session.last_answer().is_none());
}

#[test]
fn test_settle_when_idle_is_ignored() {
    let mut session = QuerySession::new();
    let outcome = session.settle(1, Ok(response("x", "High", serde_json::json!([]))));
    assert_eq!(outcome, SettleOutcome::Ignored);
    assert!(session.last_answer().is_none());
}

#[test]
fn test_request_ids_increase() {
    let (mut session, _rx) = connected_session();
    let first = submitted_id(session.submit("a"));
    session.settle(first, Err(ServiceError::Network("x".to_string())));
    let second = submitted_id(session.submit("b"));
    assert_eq!(second, first + 1);
}

#[test]
fn test_abandon_clears_busy() {
    let (mut session, _rx) = connected_session();
    session.submit("q");

    let error = session.abandon();

    assert!(matches!(error, Some(ServiceError::Network(_))));
    assert!(!session.is_busy());
}

#[test]
fn test_abandon_when_idle_is_none() {
    let mut session = QuerySession::new();
    assert!(session.abandon().is_none());
}

fn settle_result() -> impl Strategy<Value = Result<AskResponse, ServiceError>> {
    prop_oneof![
        ("[a-zA-Z ]{0,20}", prop::sample::select(vec!["High", "Medium", "Low", "?"]))
            .prop_map(|(a, c)| Ok(response(&a, c, serde_json::json!(["s.pdf"])))),
        "[a-z ]{0,20}".prop_map(|m| Err(ServiceError::Network(m))),
        (400u16..600).prop_map(|code| Err(ServiceError::Status {
            code,
            message: String::new()
        })),
        "[a-z ]{0,20}".prop_map(|m| Err(ServiceError::Parse(m))),
    ]
}

#[test]
fn test_failed_request_logs_exactly_one_warning() {
    let (mut session, _rx) = connected_session();
    let request_id = submitted_id(session.submit("q"));
    log_capture::start();

    session.settle(
        request_id,
        Err(ServiceError::Network("connection reset".to_string())),
    );

    let warnings = log_capture::warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("connection reset"));
}

#[test]
fn test_answered_and_ignored_responses_log_no_warning() {
    let (mut session, _rx) = connected_session();
    let request_id = submitted_id(session.submit("q"));
    log_capture::start();

    session.settle(request_id + 1, Err(ServiceError::Parse("stale".to_string())));
    session.settle(request_id, Ok(response("Yes", "High", serde_json::json!([]))));

    assert!(log_capture::warnings().is_empty());
}

#[test]
fn test_abandon_logs_exactly_one_warning() {
    let (mut session, _rx) = connected_session();
    session.submit("q");
    log_capture::start();

    session.abandon();
    session.abandon();

    assert_eq!(log_capture::warnings().len(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Busy is reset whatever the outcome
    #[test]
    fn prop_busy_resets_on_every_outcome(result in settle_result()) {
        let (mut session, _rx) = connected_session();
        let id = submitted_id(session.submit("question"));
        prop_assert!(session.is_busy());

        session.settle(id, result);

        prop_assert!(!session.is_busy());
    }

    // Extra submissions while busy send nothing and change nothing
    #[test]
    fn prop_reentrant_submits_are_ignored(extra in prop::collection::vec("[a-z]{1,10}", 1..10)) {
        let (mut session, mut rx) = connected_session();
        let id = submitted_id(session.submit("first"));
        session.settle(id, Ok(response("kept", "High", serde_json::json!(["a"]))));
        session.submit("second");
        let _ = rx.try_recv();
        let _ = rx.try_recv();

        for q in &extra {
            prop_assert_eq!(session.submit(q), SubmitOutcome::Busy);
        }

        prop_assert!(rx.try_recv().is_err());
        prop_assert_eq!(session.last_answer(), Some("kept"));
        prop_assert_eq!(session.last_confidence(), Some("High"));
        prop_assert_eq!(session.last_sources().len(), 1);
        prop_assert_eq!(session.pending_question(), Some("second"));
    }
}
