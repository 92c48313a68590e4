use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::event::ValidationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(domain_err) => {
                Self::new(StatusCode::BAD_REQUEST, domain_err.to_string())
            }
            ApplicationError::Infrastructure(msg) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        }
    }

    /// Request-shape errors caught before any use-case runs, e.g. an
    /// unparsable date string. Distinct from the 422 validation path, which
    /// is reserved for domain rule violations with catalogued codes.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into())
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Serialize, ToSchema)]
struct ErrorBody {
    error: String,
    message: String,
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

/// Wire representation of one validation failure. The `code` values are the
/// external contract: API consumers match on them, so they never change.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorMessage {
    pub code: &'static str,
    pub description: &'static str,
}

impl ErrorMessage {
    /// Total mapping from the closed [`ValidationError`] set. Exhaustiveness
    /// is compiler-enforced: extending the enum without extending this match
    /// does not build.
    pub fn for_error(error: ValidationError) -> Self {
        match error {
            ValidationError::TitleIsRequired => Self {
                code: "missing_title",
                description: "Title is a required field and must not be blank",
            },
            ValidationError::DateMustNotBePast => Self {
                code: "date_is_past",
                description: "The date must be today or later",
            },
        }
    }
}

/// 422 body: one entry per reported error, preserving the use-case's order.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<ErrorMessage>,
}

impl ValidationErrorResponse {
    pub fn from_errors(errors: &[ValidationError]) -> Self {
        Self {
            errors: errors.iter().copied().map(ErrorMessage::for_error).collect(),
        }
    }
}

impl IntoResponse for ValidationErrorResponse {
    fn into_response(self) -> Response {
        (StatusCode::UNPROCESSABLE_ENTITY, Json(self)).into_response()
    }
}
