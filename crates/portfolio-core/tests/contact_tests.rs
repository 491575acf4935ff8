// Host-side tests for contact form outcome handling.

use portfolio_core::contact::{
    interpret_response, status_line, SubmitError, DEFAULT_ENDPOINT, STATUS_SENDING, STATUS_SENT,
};

#[test]
fn ok_response_is_success() {
    let outcome = interpret_response(true, 200, "");
    assert_eq!(outcome, Ok(()));
    assert_eq!(status_line(&outcome), STATUS_SENT);
    assert_eq!(STATUS_SENT, "✅ Thank you! Your message has been sent.");
}

#[test]
fn relay_errors_are_joined() {
    let body = r#"{"errors":[{"field":"email","message":"should be an email"},{"message":"too short"}]}"#;
    let outcome = interpret_response(false, 422, body);
    assert_eq!(
        outcome,
        Err(SubmitError::Rejected(vec![
            "should be an email".to_string(),
            "too short".to_string()
        ]))
    );
    assert_eq!(status_line(&outcome), "❌ should be an email, too short");
}

#[test]
fn failure_without_error_list_is_generic() {
    for body in ["{}", r#"{"errors":null}"#, r#"{"errors":false}"#, r#"{"error":"x"}"#, "[]", "42"] {
        let outcome = interpret_response(false, 500, body);
        assert_eq!(outcome, Err(SubmitError::Unexpected(500)), "body {:?}", body);
        assert_eq!(
            status_line(&outcome),
            "❌ Oops! There was a problem submitting your form."
        );
    }
}

#[test]
fn unreadable_failure_body_reads_as_network_error() {
    for body in ["", "not json", "<html>502</html>", "null", r#"{"errors":"down"}"#] {
        let outcome = interpret_response(false, 502, body);
        assert_eq!(outcome, Err(SubmitError::Network), "body {:?}", body);
    }
}

#[test]
fn empty_error_list_is_a_bare_rejection() {
    let outcome = interpret_response(false, 422, r#"{"errors":[]}"#);
    assert_eq!(outcome, Err(SubmitError::Rejected(Vec::new())));
    assert_eq!(status_line(&outcome), "❌ ");
}

#[test]
fn network_error_message() {
    assert_eq!(
        status_line(&Err(SubmitError::Network)),
        "❌ Network error. Please check your connection."
    );
}

#[test]
fn defaults() {
    assert_eq!(STATUS_SENDING, "Sending...");
    assert!(DEFAULT_ENDPOINT.starts_with("https://formspree.io/f/"));
}
