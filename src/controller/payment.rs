use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    middleware::auth::AuthenticatedUser,
    model::{
        api::ErrorDto,
        payment::{CreatePaymentDto, PaymentDto},
    },
    service::payment::PaymentService,
    state::AppState,
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentQuery {
    pub ticket_id: Option<i32>,
}

/// Get the payment for a ticket.
///
/// The ticket must belong to the caller.
///
/// # Returns
/// - `200 OK` - The ticket's payment
/// - `400 Bad Request` - Missing ticketId query parameter
/// - `401 Unauthorized` - Token invalid, or ticket owned by someone else
/// - `404 Not Found` - No payment recorded for the ticket
#[utoipa::path(
    get,
    path = "/payments",
    tag = PAYMENT_TAG,
    params(
        ("ticketId" = Option<i32>, Query, description = "Id of the paid ticket")
    ),
    responses(
        (status = 200, description = "The ticket's payment", body = PaymentDto),
        (status = 400, description = "Missing ticketId", body = ErrorDto),
        (status = 401, description = "Token invalid or foreign ticket", body = ErrorDto),
        (status = 404, description = "No payment for ticket", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn get_payments(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<PaymentQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.db);

    let payment = service.get_payment(query.ticket_id, user.user_id).await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

/// Pay for a ticket.
///
/// Marks the caller's ticket PAID and records a payment priced from the ticket
/// type. Only the card issuer and the last four digits are stored.
///
/// # Returns
/// - `200 OK` - The recorded payment
/// - `400 Bad Request` - Missing ticketId
/// - `401 Unauthorized` - Token invalid, or ticket owned by someone else
/// - `403 Forbidden` - Ticket already paid
/// - `404 Not Found` - Ticket does not exist
#[utoipa::path(
    post,
    path = "/payments/process",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 200, description = "The recorded payment", body = PaymentDto),
        (status = 400, description = "Missing ticketId", body = ErrorDto),
        (status = 401, description = "Token invalid or foreign ticket", body = ErrorDto),
        (status = 403, description = "Ticket already paid", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn post_payment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.db);

    let payment = service
        .create_payment(payload.ticket_id, payload.card_data, user.user_id)
        .await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}
