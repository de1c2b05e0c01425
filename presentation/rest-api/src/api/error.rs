use std::collections::BTreeMap;

use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

pub const INVALID_PARAMETERS: &str = "Invalid parameters";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Error body shared by every endpoint.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Human-readable description of the failure
    pub message: String,
    /// Per-field messages, present only for validation failures
    #[oai(skip_serializing_if_is_none)]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }

    /// Body for path/query parameters or request bodies that cannot be decoded.
    pub fn invalid_parameters() -> Self {
        Self::new(INVALID_PARAMETERS)
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
