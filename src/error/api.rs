//! Business-rule error kinds and their HTTP status mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Closed set of business-rule failures raised by the service layer.
///
/// Each variant is one error kind; controllers never inspect messages or string
/// tags, the status mapping in `into_response` matches this enum exhaustively.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Referenced entity (ticket, room, hotel, booking, payment) absent.
    #[error("{0}")]
    NotFound(String),

    /// Caller does not own the resource being accessed or modified.
    #[error("{0}")]
    Unauthorized(String),

    /// Ticket not paid, or ticket type ineligible for hotel access.
    #[error("{0}")]
    PaymentRequired(String),

    /// Operation not allowed for the caller's ticket (remote, unpaid, or
    /// hotel-excluded ticket type), or a repeated payment attempt.
    #[error("{0}")]
    Forbidden(String),

    /// Target room is at capacity.
    #[error("no vacancies available at the moment")]
    NoVacancies,

    /// Caller tried to change a booking they never made.
    ///
    /// Kept distinct from `NoVacancies` so capacity exhaustion and a missing
    /// booking stay distinguishable; both map to 403.
    #[error("no existing booking to update")]
    NoExistingBooking,

    /// Malformed or missing required input (e.g. missing roomId or ticketId).
    #[error("{0}")]
    Validation(String),
}

/// Maps each error kind to its HTTP status.
///
/// - `NotFound` → 404
/// - `Unauthorized` → 401
/// - `PaymentRequired` → 402
/// - `Forbidden`, `NoVacancies`, `NoExistingBooking` → 403
/// - `Validation` → 400
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            Self::Forbidden(_) | Self::NoVacancies | Self::NoExistingBooking => {
                StatusCode::FORBIDDEN
            }
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
