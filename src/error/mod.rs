//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` so
//! handlers can bubble errors with `?` and get correct status codes.
//!
//! Business-rule failures live in the closed [`api::ApiError`] enum and carry their
//! own status mapping; authentication failures live in [`auth::AuthError`].
//! Infrastructure errors (database, configuration) map to 500 with the detail
//! logged server-side and a generic message returned to the client.

pub mod api;
pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{api::ApiError, auth::AuthError, config::ConfigError},
    model::api::ErrorDto,
};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application and provides
/// automatic conversion to HTTP responses. All variants use `#[from]` so lower
/// layers convert with `?`. Domain errors (`ApiError`, `AuthError`) handle their
/// own response mapping; the rest collapse to 500 Internal Server Error.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error from the bearer-token middleware.
    ///
    /// Delegates to `AuthError::into_response()` (401 Unauthorized).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Business-rule violation from the service layer.
    ///
    /// Delegates to `ApiError::into_response()` for per-kind status mapping.
    #[error(transparent)]
    ApiErr(#[from] ApiError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with the detail logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors delegate to their own mapping; everything else is logged and
/// returned as a generic 500 to avoid leaking internals.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ApiErr(err) => err.into_response(),
            Self::AuthErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error.
///
/// Logs the full error message for debugging but returns a generic message to the
/// client. Used as the fallback for errors without a specific response mapping.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
