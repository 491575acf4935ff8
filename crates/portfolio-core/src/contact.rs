use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

// Turns a finished form POST into the status line shown under the form.

pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/xblzapnl";

pub const STATUS_SENDING: &str = "Sending...";
pub const STATUS_SENT: &str = "✅ Thank you! Your message has been sent.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("❌ Network error. Please check your connection.")]
    Network,
    #[error("❌ {}", .0.join(", "))]
    Rejected(Vec<String>),
    #[error("❌ Oops! There was a problem submitting your form.")]
    Unexpected(u16),
}

#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    errors: Option<Vec<RelayError>>,
}

#[derive(Debug, Deserialize)]
struct RelayError {
    #[serde(default)]
    message: String,
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Classify a completed HTTP exchange. `body` is the raw response text.
///
/// A rejection body that is not JSON (or is `null`) counts as a network failure,
/// the same as a failed request. An `errors` list, even an empty one, is a
/// rejection; a body without one is `Unexpected`.
pub fn interpret_response(ok: bool, status: u16, body: &str) -> Result<(), SubmitError> {
    if ok {
        return Ok(());
    }
    let value: Value = serde_json::from_str(body).map_err(|_| SubmitError::Network)?;
    if value.is_null() {
        return Err(SubmitError::Network);
    }
    if !value.is_object() {
        return Err(SubmitError::Unexpected(status));
    }
    match serde_json::from_value::<RelayErrorBody>(value.clone()) {
        Ok(RelayErrorBody { errors: Some(errs) }) => Err(SubmitError::Rejected(
            errs.into_iter().map(|e| e.message).collect(),
        )),
        Ok(RelayErrorBody { errors: None }) => Err(SubmitError::Unexpected(status)),
        // `errors` present but not a list of objects
        Err(_) if value.get("errors").is_some_and(is_truthy) => Err(SubmitError::Network),
        Err(_) => Err(SubmitError::Unexpected(status)),
    }
}

/// Status line for a finished submission.
pub fn status_line(outcome: &Result<(), SubmitError>) -> String {
    match outcome {
        Ok(()) => STATUS_SENT.to_string(),
        Err(e) => e.to_string(),
    }
}
