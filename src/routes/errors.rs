//! JSON error responses for the REST endpoints.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

/// Body returned with every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub timestamp: NaiveDateTime,
    pub status: u16,
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    fn new(status: StatusCode, message: String) -> Self {
        Self {
            timestamp: Utc::now().naive_utc(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message,
        }
    }
}

/// Error type returned by the route handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("{0}")]
    BadRequest(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Service(err) => match err {
                ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
                ServiceError::Validation(_) | ServiceError::TypeConstraint(_) => {
                    StatusCode::BAD_REQUEST
                }
                ServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
                ServiceError::Repository(
                    RepositoryError::ForeignKeyViolation(_) | RepositoryError::ConstraintViolation(_),
                ) => StatusCode::BAD_REQUEST,
                ServiceError::Repository(_) | ServiceError::Internal(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("Request failed: {self}");
            "Erro interno do servidor".to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(status).json(ErrorBody::new(status, message))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Turns malformed or invalid JSON bodies into a 400 JSON response.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected request body: {err}");
    ApiError::BadRequest(err.to_string()).into()
}

/// Turns unparsable path segments (e.g. a non-numeric id) into a 400 JSON response.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected path: {err}");
    ApiError::BadRequest(err.to_string()).into()
}

/// Turns unparsable query strings into a 400 JSON response.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected query string: {err}");
    ApiError::BadRequest(err.to_string()).into()
}
