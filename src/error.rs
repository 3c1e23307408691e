use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::dao::storage::StorageError;

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage backend is unavailable.
    #[error("storage unavailable")]
    Unavailable(#[source] StorageError),
    /// The write collides with data already in the store.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Request payload failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Conflict { message } => ServiceError::Conflict(message),
            other => ServiceError::Unavailable(other),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::UnprocessableEntity(format!("validation failed: {}", err))
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Conflict with current state.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Body was not sent as JSON.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
    /// Well-formed body that does not describe a valid resource.
    #[error("unprocessable entity: {0}")]
    UnprocessableEntity(String),
    /// Service unavailable or degraded.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Unavailable(source) => AppError::ServiceUnavailable(source.to_string()),
            ServiceError::Conflict(message) => AppError::Conflict(message),
            ServiceError::Validation(errors) => errors.into(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => AppError::UnprocessableEntity(err.body_text()),
            JsonRejection::MissingJsonContentType(err) => {
                AppError::UnsupportedMediaType(err.body_text())
            }
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn service_errors_map_to_http_statuses() {
        let unavailable = ServiceError::from(StorageError::unavailable(
            "down".into(),
            std::io::Error::other("socket closed"),
        ));
        assert_eq!(
            status_of(unavailable.into()),
            StatusCode::SERVICE_UNAVAILABLE
        );

        let conflict = ServiceError::from(StorageError::conflict("game `1` already exists"));
        assert_eq!(status_of(conflict.into()), StatusCode::CONFLICT);

        let validation = ServiceError::Validation(ValidationErrors::new());
        assert_eq!(
            status_of(validation.into()),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        assert_eq!(
            status_of(AppError::NotFound("/api/game".into())),
            StatusCode::NOT_FOUND
        );
    }
}
