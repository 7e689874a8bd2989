use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures while authenticating a request through the bearer-token middleware.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header on the request.
    #[error("authorization header is missing")]
    MissingToken,

    /// `Authorization` header present but not of the form `Bearer <token>`.
    #[error("authorization header is malformed")]
    MalformedToken,

    /// Token did not resolve to an active session.
    #[error("no session found for the given token")]
    SessionNotFound,
}

/// All authentication failures answer 401 Unauthorized.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
