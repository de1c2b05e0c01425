use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;
use business::domain::product::validation::ValidationErrors;

use crate::api::error::{ErrorResponse, INTERNAL_ERROR, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ProductError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(self.to_string())),
            ),
            ProductError::Repository(err) => {
                tracing::error!(error = %err, "Product store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(INTERNAL_ERROR)),
                )
            }
        }
    }
}

impl IntoErrorResponse for ValidationErrors {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                message,
                errors: Some(self.into_fields()),
            }),
        )
    }
}
