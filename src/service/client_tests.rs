//! Tests for the HTTP answering-service client

use super::*;

fn config(base_url: &str) -> ServiceConfig {
    ServiceConfig {
        base_url: base_url.to_string(),
        request_timeout_secs: None,
    }
}

#[test]
fn test_new_trims_trailing_slash() {
    let service = HttpAnswerService::new(&config("http://localhost:8000/")).unwrap();
    assert_eq!(service.base_url(), "http://localhost:8000");
}

#[test]
fn test_endpoint_joins_paths() {
    let service = HttpAnswerService::new(&config("http://example.test")).unwrap();
    assert_eq!(
        service.endpoint(QUESTIONS_PATH),
        "http://example.test/questions"
    );
    assert_eq!(service.endpoint(ASK_PATH), "http://example.test/ask");
}

#[test]
fn test_new_with_timeout() {
    let config = ServiceConfig {
        base_url: "http://localhost:8000".to_string(),
        request_timeout_secs: Some(5),
    };
    assert!(HttpAnswerService::new(&config).is_ok());
}

#[test]
fn test_decode_body_success() {
    let body = r#"{"questions": ["Who has worked remotely?"]}"#;
    let parsed: QuestionsResponse = decode_body(StatusCode::OK, body).unwrap();
    assert_eq!(parsed.questions, vec!["Who has worked remotely?"]);
}

#[test]
fn test_decode_body_error_status_keeps_body() {
    let result = decode_body::<AskResponse>(StatusCode::UNPROCESSABLE_ENTITY, "bad question");
    assert_eq!(
        result,
        Err(ServiceError::Status {
            code: 422,
            message: "bad question".to_string(),
        })
    );
}

#[test]
fn test_decode_body_error_status_empty_body_uses_reason() {
    let result = decode_body::<AskResponse>(StatusCode::INTERNAL_SERVER_ERROR, "  ");
    assert_eq!(
        result,
        Err(ServiceError::Status {
            code: 500,
            message: "Internal Server Error".to_string(),
        })
    );
}

#[test]
fn test_decode_body_error_message_is_truncated() {
    let body = "x".repeat(1000);
    match decode_body::<AskResponse>(StatusCode::BAD_GATEWAY, &body) {
        Err(ServiceError::Status { message, .. }) => {
            assert_eq!(message.chars().count(), MAX_ERROR_BODY_CHARS);
        }
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[test]
fn test_decode_body_malformed_json() {
    let result = decode_body::<AskResponse>(StatusCode::OK, "<html>oops</html>");
    assert!(matches!(result, Err(ServiceError::Parse(_))));
}

#[test]
fn test_service_error_display() {
    assert_eq!(
        ServiceError::Network("connection refused".to_string()).to_string(),
        "Network error: connection refused"
    );
    assert_eq!(
        ServiceError::Status {
            code: 503,
            message: "down".to_string()
        }
        .to_string(),
        "Service error (503): down"
    );
    assert_eq!(
        ServiceError::Parse("missing field `answer`".to_string()).to_string(),
        "Malformed response: missing field `answer`"
    );
}
