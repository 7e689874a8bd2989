use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    middleware::auth::AuthenticatedUser,
    model::{
        api::ErrorDto,
        ticket::{CreateTicketDto, TicketDto, TicketType, TicketTypeDto},
    },
    service::ticket::TicketService,
    state::AppState,
};

/// Tag for grouping ticket endpoints in OpenAPI documentation
pub static TICKET_TAG: &str = "ticket";

/// Get the caller's ticket.
///
/// # Returns
/// - `200 OK` - The ticket with its type
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Caller has no ticket
#[utoipa::path(
    get,
    path = "/tickets",
    tag = TICKET_TAG,
    responses(
        (status = 200, description = "The caller's ticket", body = TicketDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Caller has no ticket", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let service = TicketService::new(&state.db);

    let ticket = service.get_ticket(user.user_id).await?;

    Ok((StatusCode::OK, Json(ticket.into_dto())))
}

/// List all ticket types.
///
/// # Returns
/// - `200 OK` - Ticket types, possibly an empty list
/// - `401 Unauthorized` - Missing or invalid bearer token
#[utoipa::path(
    get,
    path = "/tickets/types",
    tag = TICKET_TAG,
    responses(
        (status = 200, description = "All ticket types", body = [TicketTypeDto]),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn get_ticket_types(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let service = TicketService::new(&state.db);

    let types = service.list_ticket_types().await?;
    let types: Vec<TicketTypeDto> = types.into_iter().map(TicketType::into_dto).collect();

    Ok((StatusCode::OK, Json(types)))
}

/// Reserve a ticket.
///
/// Creates a RESERVED ticket of the requested type for the caller. Requires an
/// existing enrollment.
///
/// # Returns
/// - `201 Created` - The reserved ticket
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Caller not enrolled, or ticket type absent
#[utoipa::path(
    post,
    path = "/tickets",
    tag = TICKET_TAG,
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "The reserved ticket", body = TicketDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Enrollment or ticket type not found", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn post_ticket(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TicketService::new(&state.db);

    let ticket = service
        .create_ticket(payload.ticket_type_id, user.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(ticket.into_dto())))
}
