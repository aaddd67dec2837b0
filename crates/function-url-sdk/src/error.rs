//! Error types for function URL handlers and their runtime loop

use thiserror::Error;

/// Errors that can occur while hosting a handler
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("IPC error: {0}")]
    Ipc(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Payload too large: {size} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl HandlerError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::InvalidPayload(_) => 400,
            HandlerError::PayloadTooLarge { .. } => 413,
            _ => 500,
        }
    }

    /// Convert to a Response
    pub fn to_response(&self) -> crate::Response {
        crate::Response::json(
            self.status_code(),
            &serde_json::json!({
                "error": self.to_string()
            }),
        )
    }
}

impl From<HandlerError> for crate::Response {
    fn from(err: HandlerError) -> Self {
        err.to_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(HandlerError::InvalidPayload("bad".into()).status_code(), 400);
        assert_eq!(
            HandlerError::PayloadTooLarge { size: 10, limit: 5 }.status_code(),
            413
        );
        assert_eq!(HandlerError::Ipc("closed".into()).status_code(), 500);
    }

    #[test]
    fn test_error_response_body() {
        let response: crate::Response = HandlerError::PayloadTooLarge { size: 10, limit: 5 }.into();
        assert_eq!(response.status_code, 413);
        assert_eq!(
            response.body,
            r#"{"error": "Payload too large: 10 bytes exceeds the 5 byte limit"}"#
        );
    }
}
