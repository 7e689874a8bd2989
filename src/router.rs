use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{booking, hotel, payment, ticket},
    model,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        booking::get_booking,
        booking::post_booking,
        booking::put_booking,
        hotel::get_hotels,
        hotel::get_hotel,
        payment::get_payments,
        payment::post_payment,
        ticket::get_ticket,
        ticket::get_ticket_types,
        ticket::post_ticket,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::booking::BookingWithRoomDto,
        model::booking::BookingIdDto,
        model::booking::CreateBookingDto,
        model::hotel::HotelDto,
        model::hotel::RoomDto,
        model::hotel::HotelWithRoomsDto,
        model::payment::PaymentDto,
        model::payment::CreatePaymentDto,
        model::payment::CardData,
        model::ticket::TicketDto,
        model::ticket::TicketTypeDto,
        model::ticket::CreateTicketDto,
    )),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/booking",
            get(booking::get_booking).post(booking::post_booking),
        )
        .route("/booking/{bookingId}", put(booking::put_booking))
        .route("/hotels", get(hotel::get_hotels))
        .route("/hotels/{hotelId}", get(hotel::get_hotel))
        .route("/payments", get(payment::get_payments))
        .route("/payments/process", post(payment::post_payment))
        .route("/tickets", get(ticket::get_ticket).post(ticket::post_ticket))
        .route("/tickets/types", get(ticket::get_ticket_types))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
