use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use comment_core::types::ErrorResponse;
use llm_gateway::GatewayError;
use thiserror::Error;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

/// Boundary error for both endpoints. Everything the handlers can fail with
/// is surfaced to the caller as a 400 with `{"error": message}`; nothing
/// propagates as an unhandled fault.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
