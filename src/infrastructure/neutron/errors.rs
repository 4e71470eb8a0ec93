use reqwest::StatusCode;
use serde_json::Value;

use crate::domain::errors::ClientError;

/// Classify a non-success response.
///
/// The server wraps failures as
/// `{"NeutronError": {"type": ..., "message": ..., "detail": ...}}`; the
/// message is surfaced when present, otherwise the raw body.
pub fn error_from_status(status: StatusCode, body: &str) -> ClientError {
    let message = extract_message(body).unwrap_or_else(|| {
        if body.trim().is_empty() {
            status.to_string()
        } else {
            body.trim().to_string()
        }
    });

    match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::CONFLICT => ClientError::Conflict(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ClientError::Validation(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Unauthorized(message),
        _ => ClientError::Transport(format!("{status}: {message}")),
    }
}

/// Map a transport-level failure.
pub fn error_from_reqwest(err: &reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Transport(format!("Request timed out: {err}"))
    } else if err.is_decode() {
        ClientError::Decode(err.to_string())
    } else {
        ClientError::Transport(err.to_string())
    }
}

fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let error = value.get("NeutronError").unwrap_or(&value);
    match error {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map.get("message").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutron_error_message_extracted() {
        let body = r#"{"NeutronError": {"type": "RuleNotFound", "message": "Rule r1 could not be found.", "detail": ""}}"#;
        let err = error_from_status(StatusCode::NOT_FOUND, body);
        assert!(matches!(err, ClientError::NotFound(ref m) if m == "Rule r1 could not be found."));
    }

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            error_from_status(StatusCode::CONFLICT, "{}"),
            ClientError::Conflict(_)
        ));
        assert!(matches!(
            error_from_status(StatusCode::BAD_REQUEST, ""),
            ClientError::Validation(_)
        ));
        assert!(matches!(
            error_from_status(StatusCode::UNAUTHORIZED, ""),
            ClientError::Unauthorized(_)
        ));
        assert!(matches!(
            error_from_status(StatusCode::SERVICE_UNAVAILABLE, "down"),
            ClientError::Transport(_)
        ));
    }

    #[test]
    fn test_plain_text_body_is_kept() {
        let err = error_from_status(StatusCode::CONFLICT, "listener in use\n");
        assert_eq!(err.to_string(), "Conflict: listener in use");
    }

    #[test]
    fn test_empty_body_uses_status() {
        let err = error_from_status(StatusCode::NOT_FOUND, "");
        assert_eq!(err.to_string(), "404 Not Found");
    }
}
