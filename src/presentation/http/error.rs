use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const STORAGE_FAILURE: &str = "StorageFailure";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    kind: Option<&'static str>,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Unauthorized(auth) => Self {
                status: StatusCode::UNAUTHORIZED,
                kind: Some(auth.kind()),
                message: auth.to_string(),
            },
            // Driver messages stay in the logs.
            ApplicationError::Domain(DomainError::Persistence(_)) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                kind: Some(STORAGE_FAILURE),
                message: "failed to persist api logs".into(),
            },
            ApplicationError::Infrastructure(msg) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                kind: None,
                message: msg,
            },
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            kind: self.kind.map(str::to_string),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Canonical HTTP reason phrase, e.g. `Unauthorized`.
    pub error: String,
    /// Machine-readable failure kind, when one applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
