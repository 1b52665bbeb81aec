use crate::utils::validation::ValidationError;
use reqwest::StatusCode;
use thiserror::Error;

/// Longest API error body carried into an error message
const MAX_ERROR_BODY: usize = 2048;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl ClientError {
    /// Build an `Api` error from a non-success response body.
    ///
    /// The service reports failures as `{"error": "..."}` JSON; anything
    /// else is carried as raw text, truncated so a binary body cannot
    /// flood the logs.
    pub fn from_api_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .or_else(|| v.get("message"))
                    .and_then(|m| m.as_str())
                    .map(|m| m.to_string())
            })
            .unwrap_or_else(|| {
                let mut text = body.trim().to_string();
                if text.len() > MAX_ERROR_BODY {
                    let mut end = MAX_ERROR_BODY;
                    while !text.is_char_boundary(end) {
                        end -= 1;
                    }
                    text.truncate(end);
                }
                text
            });

        ClientError::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_json_body() {
        let err = ClientError::from_api_response(
            StatusCode::BAD_REQUEST,
            r#"{"error": "new_owner_password is required"}"#,
        );
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "new_owner_password is required");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_api_error_from_plain_body() {
        let err =
            ClientError::from_api_response(StatusCode::INTERNAL_SERVER_ERROR, "boom\n");
        match err {
            ClientError::Api { message, .. } => assert_eq!(message, "boom"),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_api_error_body_truncated() {
        let body = "x".repeat(10_000);
        let err = ClientError::from_api_response(StatusCode::BAD_GATEWAY, &body);
        match err {
            ClientError::Api { message, .. } => assert_eq!(message.len(), MAX_ERROR_BODY),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_display_formats() {
        let err = ClientError::Api {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "bad region".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (422 Unprocessable Entity): bad region"
        );
    }
}
