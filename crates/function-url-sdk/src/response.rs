//! Function URL response representation for handlers

use serde::{Deserialize, Serialize};

use crate::body;

/// The value returned to the hosting platform.
///
/// `body` holds JSON *text*: the platform serializes the response structure
/// itself, so the body ends up encoded twice on the wire.
///
/// ```text
/// {"statusCode": 200, "body": "{\"message\": \"Success\"}"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// HTTP status code
    pub status_code: u16,

    /// Response body
    pub body: String,
}

impl Response {
    /// Create a response from a status code and raw body text.
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    /// Create a 200 OK response with JSON body.
    ///
    /// # Example
    /// ```ignore
    /// Response::ok(&json!({"message": "Success"}))
    /// Response::ok(&my_struct) // If my_struct implements Serialize
    /// ```
    pub fn ok<T: Serialize + ?Sized>(body: &T) -> Self {
        Self::json(200, body)
    }

    /// Create a JSON response with a custom status code.
    ///
    /// The body is encoded with [`body::to_string`]. A value that cannot be
    /// encoded yields a 500 error response instead.
    pub fn json<T: Serialize + ?Sized>(status_code: u16, body: &T) -> Self {
        match body::to_string(body) {
            Ok(text) => Self::new(status_code, text),
            Err(err) => err.to_response(),
        }
    }
}
