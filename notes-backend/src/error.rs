//! API error type rendered as `{ "message": ... }` JSON bodies.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required body field is absent or empty
    #[error("Missing `{0}` in request body")]
    MissingField(&'static str),
    #[error("Not Found")]
    NotFound,
    /// The request body could not be decoded
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

/// Body of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Internal(reason) => {
                log::error!("Internal error: {}", reason);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    fn body_of(err: ApiError) -> (StatusCode, ErrorBody) {
        let resp = err.error_response();
        let status = resp.status();
        let bytes = resp.into_body().try_into_bytes().unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_missing_field_message_is_literal() {
        let (status, body) = body_of(ApiError::MissingField("title"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "Missing `title` in request body");
    }

    #[test]
    fn test_not_found_body() {
        let (status, body) = body_of(ApiError::NotFound);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Not Found");
    }

    #[test]
    fn test_internal_error_does_not_leak_reason() {
        let (status, body) = body_of(ApiError::Internal("lock poisoned".to_string()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, INTERNAL_ERROR_MESSAGE);
    }
}
