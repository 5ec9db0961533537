use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::{api, ValidationError};

/// An error from the API
#[derive(Debug, PartialEq)]
pub enum Error {
    /// The request failed one or more validation rules. Carries every
    /// failure, not just the first.
    Validation(Vec<ValidationError>),
}

impl Error {
    /// Unwrap the collected validation failures
    #[cfg(test)]
    pub fn unwrap_validation(self) -> Vec<ValidationError> {
        match self {
            Self::Validation(errors) => errors,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(api::error::Resp { errors }),
            )
                .into_response(),
        }
    }
}
