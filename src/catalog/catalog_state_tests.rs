//! Tests for catalog state

use super::*;
use crate::service::ServiceError;
use proptest::prelude::*;

fn loaded(questions: &[&str]) -> CatalogState {
    let mut state = CatalogState::new();
    state.apply(CatalogLoad {
        questions: questions.iter().map(|q| q.to_string()).collect(),
        error: None,
    });
    state
}

#[test]
fn test_new_state_is_loading_and_empty() {
    let state = CatalogState::new();
    assert_eq!(state.status(), &CatalogStatus::Loading);
    assert!(state.is_empty());
    assert!(state.selected_index().is_none());
    assert!(state.selected_question().is_none());
}

#[test]
fn test_apply_success_stores_questions_verbatim() {
    let state = loaded(&["What CV formats are supported?"]);
    assert_eq!(state.status(), &CatalogStatus::Loaded);
    assert_eq!(state.questions(), ["What CV formats are supported?"]);
    assert_eq!(state.selected_question(), Some("What CV formats are supported?"));
}

#[test]
fn test_apply_failure_leaves_catalog_empty_and_reports_once() {
    let mut state = CatalogState::new();
    let message = state.apply(CatalogLoad {
        questions: Vec::new(),
        error: Some(ServiceError::Network("connection refused".to_string())),
    });

    let message = message.expect("failure should be reported");
    assert!(message.contains("connection refused"));
    assert!(state.is_empty());
    assert!(matches!(state.status(), CatalogStatus::Failed(_)));
}

#[test]
fn test_apply_is_one_shot() {
    let mut state = loaded(&["a"]);
    let message = state.apply(CatalogLoad {
        questions: Vec::new(),
        error: Some(ServiceError::Parse("x".to_string())),
    });
    assert!(message.is_none());
    assert_eq!(state.questions(), ["a"]);
}

#[test]
fn test_selection_wraps() {
    let mut state = loaded(&["a", "b", "c"]);
    state.select_previous();
    assert_eq!(state.selected_question(), Some("c"));
    state.select_next();
    assert_eq!(state.selected_question(), Some("a"));
    state.select_next();
    assert_eq!(state.selected_index(), Some(1));
}

#[test]
fn test_selection_on_empty_catalog_is_noop() {
    let mut state = loaded(&[]);
    state.select_next();
    state.select_previous();
    assert!(state.selected_index().is_none());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_loaded_questions_match_response(questions in prop::collection::vec(".*", 0..20)) {
        let mut state = CatalogState::new();
        let message = state.apply(CatalogLoad { questions: questions.clone(), error: None });
        prop_assert!(message.is_none());
        prop_assert_eq!(state.questions(), questions.as_slice());
    }

    #[test]
    fn prop_selection_stays_in_bounds(
        len in 1usize..10,
        moves in prop::collection::vec(prop::bool::ANY, 0..50),
    ) {
        let questions: Vec<String> = (0..len).map(|i| format!("q{}", i)).collect();
        let mut state = CatalogState::new();
        state.apply(CatalogLoad { questions, error: None });

        for down in moves {
            if down { state.select_next() } else { state.select_previous() }
            let idx = state.selected_index().unwrap();
            prop_assert!(idx < len);
        }
    }
}
