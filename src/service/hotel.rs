//! Hotel listing business logic.
//!
//! Every hotel read is gated by the same access check: the caller needs a paid,
//! in-person, hotel-inclusive ticket. Reads past the gate are plain lookups.

use sea_orm::DatabaseConnection;

use crate::{
    data::{hotel::HotelRepository, ticket::TicketRepository},
    error::{api::ApiError, AppError},
    model::{
        hotel::{Hotel, HotelWithRooms},
        ticket::TicketStatus,
    },
};

pub struct HotelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all hotels.
    ///
    /// # Returns
    /// - `Ok(Vec<Hotel>)` - Non-empty hotel list
    /// - `Err(ApiError::NotFound)` - Caller has no ticket, or no hotels exist
    /// - `Err(ApiError::PaymentRequired)` - Ticket unpaid or ineligible
    pub async fn get_hotels(&self, user_id: i32) -> Result<Vec<Hotel>, AppError> {
        self.verify_access(user_id).await?;

        let hotels = HotelRepository::new(self.db).find_all().await?;

        if hotels.is_empty() {
            return Err(ApiError::NotFound("no hotels found".to_string()).into());
        }

        Ok(hotels)
    }

    /// Gets one hotel with its rooms.
    ///
    /// # Returns
    /// - `Ok(HotelWithRooms)` - The hotel and its rooms
    /// - `Err(ApiError::NotFound)` - Caller has no ticket, or hotel absent
    /// - `Err(ApiError::PaymentRequired)` - Ticket unpaid or ineligible
    pub async fn get_hotel(&self, hotel_id: i32, user_id: i32) -> Result<HotelWithRooms, AppError> {
        self.verify_access(user_id).await?;

        let hotel = HotelRepository::new(self.db)
            .find_with_rooms(hotel_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("hotel not found".to_string()))?;

        Ok(hotel)
    }

    /// Access gate run before every hotel read.
    ///
    /// The caller must hold a ticket at all (NotFound otherwise), and that ticket
    /// must be paid, in-person, and hotel-inclusive (PaymentRequired otherwise).
    async fn verify_access(&self, user_id: i32) -> Result<(), AppError> {
        let ticket = TicketRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("no ticket found for user".to_string()))?;

        let not_paid = ticket.ticket.status != TicketStatus::Paid;
        let is_remote = ticket.ticket_type.is_remote;
        let not_includes_hotel = !ticket.ticket_type.includes_hotel;

        if not_paid || is_remote || not_includes_hotel {
            return Err(ApiError::PaymentRequired(
                "ticket does not grant hotel access".to_string(),
            )
            .into());
        }

        Ok(())
    }
}
