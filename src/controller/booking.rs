use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::AuthenticatedUser,
    model::{
        api::ErrorDto,
        booking::{BookingIdDto, BookingWithRoomDto, CreateBookingDto},
    },
    service::booking::BookingService,
    state::AppState,
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Get the caller's booking.
///
/// Returns the caller's room booking together with the reserved room.
///
/// # Returns
/// - `200 OK` - The booking with its room
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Caller has no booking
#[utoipa::path(
    get,
    path = "/booking",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "The caller's booking", body = BookingWithRoomDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Caller has no booking", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn get_booking(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let booking = service.get_booking(user.user_id).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Book a room.
///
/// Creates a booking for the caller in the requested room. The caller's ticket
/// must be paid, in-person, and hotel-inclusive, and the room must have a free
/// slot.
///
/// # Returns
/// - `200 OK` - Id of the created booking
/// - `400 Bad Request` - Missing roomId
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Ineligible ticket or no vacancy in the room
/// - `404 Not Found` - Caller has no ticket, or the room does not exist
#[utoipa::path(
    post,
    path = "/booking",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 200, description = "Id of the created booking", body = BookingIdDto),
        (status = 400, description = "Missing roomId", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Ineligible ticket or room at capacity", body = ErrorDto),
        (status = 404, description = "Ticket or room not found", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn post_booking(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let booking_id = service
        .create_booking(payload.room_id, user.user_id)
        .await?;

    Ok((StatusCode::OK, Json(BookingIdDto { booking_id })))
}

/// Move a booking to another room.
///
/// Re-points the caller's existing booking at a different room. The caller may
/// only modify their own booking, and the target room must have a free slot.
///
/// # Returns
/// - `200 OK` - Id of the updated booking
/// - `400 Bad Request` - Missing roomId
/// - `401 Unauthorized` - Token invalid, or booking owned by someone else
/// - `403 Forbidden` - Caller has no booking, or target room at capacity
/// - `404 Not Found` - Target room does not exist
#[utoipa::path(
    put,
    path = "/booking/{bookingId}",
    tag = BOOKING_TAG,
    params(
        ("bookingId" = i32, Path, description = "Id of the booking to move")
    ),
    request_body = CreateBookingDto,
    responses(
        (status = 200, description = "Id of the updated booking", body = BookingIdDto),
        (status = 400, description = "Missing roomId", body = ErrorDto),
        (status = 401, description = "Token invalid or foreign booking", body = ErrorDto),
        (status = 403, description = "No booking to move or room at capacity", body = ErrorDto),
        (status = 404, description = "Target room not found", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn put_booking(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(booking_id): Path<i32>,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let booking_id = service
        .update_booking(payload.room_id, booking_id, user.user_id)
        .await?;

    Ok((StatusCode::OK, Json(BookingIdDto { booking_id })))
}
