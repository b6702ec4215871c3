use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Request-boundary faults. Out-of-range inputs are not errors here; the
/// handler reports those as plain-text messages in a 200 body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing form field `{0}`")]
    MissingField(&'static str),
    #[error("form field `{0}` is not a valid number")]
    InvalidNumber(&'static str),
    #[error("model inference failed")]
    Inference(#[from] anyhow::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) | AppError::InvalidNumber(_) => StatusCode::BAD_REQUEST,
            AppError::Inference(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(format!("Error: {self}"))
    }
}
