//! Relay Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Relay error types.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Missing or mismatching token query parameter.
    #[error("Invalid or missing token")]
    InvalidToken,

    /// Request body was not valid JSON.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// No event type in the header or the body.
    #[error("Missing event type")]
    MissingEventType,

    /// Outbound call to Discord failed.
    ///
    /// The message is intentionally fixed: `reqwest` errors can echo the
    /// webhook URL, which carries the channel secret.
    #[error("Forwarding to Discord failed")]
    Forward(#[from] reqwest::Error),

    /// Discord answered with a non-success status.
    #[error("Discord returned HTTP {0}")]
    DiscordStatus(u16),
}

/// Error response body for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::InvalidToken => (StatusCode::UNAUTHORIZED, "INVALID_TOKEN"),
            Self::InvalidPayload(_) => (StatusCode::BAD_REQUEST, "INVALID_PAYLOAD"),
            Self::MissingEventType => (StatusCode::BAD_REQUEST, "MISSING_EVENT_TYPE"),
            Self::Forward(_) | Self::DiscordStatus(_) => {
                (StatusCode::BAD_GATEWAY, "FORWARD_FAILED")
            }
        };

        let body = Json(ErrorResponse {
            error: code.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            RelayError::InvalidToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            RelayError::InvalidPayload("bad".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RelayError::MissingEventType.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RelayError::DiscordStatus(500).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
