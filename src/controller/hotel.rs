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
        hotel::{Hotel, HotelDto, HotelWithRoomsDto},
    },
    service::hotel::HotelService,
    state::AppState,
};

/// Tag for grouping hotel endpoints in OpenAPI documentation
pub static HOTEL_TAG: &str = "hotel";

/// List all hotels.
///
/// Available only to callers whose ticket is paid, in-person, and
/// hotel-inclusive.
///
/// # Returns
/// - `200 OK` - Non-empty list of hotels
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `402 Payment Required` - Ticket unpaid or ineligible for hotels
/// - `404 Not Found` - Caller has no ticket, or no hotels exist
#[utoipa::path(
    get,
    path = "/hotels",
    tag = HOTEL_TAG,
    responses(
        (status = 200, description = "All hotels", body = [HotelDto]),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 402, description = "Ticket unpaid or ineligible", body = ErrorDto),
        (status = 404, description = "No ticket or no hotels", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn get_hotels(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let service = HotelService::new(&state.db);

    let hotels = service.get_hotels(user.user_id).await?;
    let hotels: Vec<HotelDto> = hotels.into_iter().map(Hotel::into_dto).collect();

    Ok((StatusCode::OK, Json(hotels)))
}

/// Get one hotel with its rooms.
///
/// Subject to the same access gate as the hotel list.
///
/// # Returns
/// - `200 OK` - The hotel and its rooms
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `402 Payment Required` - Ticket unpaid or ineligible for hotels
/// - `404 Not Found` - Caller has no ticket, or hotel absent
#[utoipa::path(
    get,
    path = "/hotels/{hotelId}",
    tag = HOTEL_TAG,
    params(
        ("hotelId" = i32, Path, description = "Id of the hotel to fetch")
    ),
    responses(
        (status = 200, description = "Hotel with rooms", body = HotelWithRoomsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 402, description = "Ticket unpaid or ineligible", body = ErrorDto),
        (status = 404, description = "No ticket or hotel not found", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(hotel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = HotelService::new(&state.db);

    let hotel = service.get_hotel(hotel_id, user.user_id).await?;

    Ok((StatusCode::OK, Json(hotel.into_dto())))
}
