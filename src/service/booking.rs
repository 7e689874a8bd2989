//! Room booking business logic.
//!
//! Holds the guard chain for creating and moving bookings: a valid `roomId`, an
//! eligible ticket (paid, in-person, hotel-inclusive), an existing room, and a
//! free slot in it. The room lookup, capacity check, and row write share one
//! transaction so two concurrent requests cannot both take the last slot.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{booking::BookingRepository, ticket::TicketRepository},
    error::{api::ApiError, AppError},
    model::{
        booking::BookingWithRoom,
        ticket::{TicketStatus, TicketWithType},
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's booking together with the reserved room.
    ///
    /// # Returns
    /// - `Ok(BookingWithRoom)` - The user's booking
    /// - `Err(ApiError::NotFound)` - User has no booking
    pub async fn get_booking(&self, user_id: i32) -> Result<BookingWithRoom, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("no booking found for user".to_string()))?;

        Ok(booking)
    }

    /// Creates a booking for the user in the given room.
    ///
    /// Guard chain, in order:
    /// 1. `roomId` must be present and positive.
    /// 2. The user must hold a ticket.
    /// 3. The ticket must be paid, in-person, and hotel-inclusive.
    /// 4. The room must exist.
    /// 5. The room must have a free slot.
    ///
    /// Steps 4-5 and the insert run in one transaction.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the created booking
    /// - `Err(AppError)` - First failing guard, mapped per kind
    pub async fn create_booking(
        &self,
        room_id: Option<i32>,
        user_id: i32,
    ) -> Result<i32, AppError> {
        let room_id = require_room_id(room_id)?;

        let ticket = TicketRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("no ticket found for user".to_string()))?;

        ensure_ticket_can_book(&ticket)?;

        let txn = self.db.begin().await?;
        let repo = BookingRepository::new(&txn);

        let occupancy = repo
            .find_room_with_occupancy(room_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("room not found".to_string()))?;

        if occupancy.is_full() {
            return Err(ApiError::NoVacancies.into());
        }

        let booking = repo.create(room_id, user_id).await?;
        txn.commit().await?;

        Ok(booking.id)
    }

    /// Moves the user's booking to a different room.
    ///
    /// Guard chain, in order:
    /// 1. `roomId` must be present and positive.
    /// 2. The caller must already have a booking.
    /// 3. That booking's id must match the path parameter.
    /// 4. The target room must exist.
    /// 5. The target room must have a free slot.
    ///
    /// Steps 4-5 and the update run in one transaction.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the updated booking (unchanged)
    /// - `Err(AppError)` - First failing guard, mapped per kind
    pub async fn update_booking(
        &self,
        room_id: Option<i32>,
        booking_id: i32,
        user_id: i32,
    ) -> Result<i32, AppError> {
        let room_id = require_room_id(room_id)?;

        let existing = BookingRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiError::NoExistingBooking)?;

        if existing.id != booking_id {
            return Err(
                ApiError::Unauthorized("booking does not belong to caller".to_string()).into(),
            );
        }

        let txn = self.db.begin().await?;
        let repo = BookingRepository::new(&txn);

        let occupancy = repo
            .find_room_with_occupancy(room_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("room not found".to_string()))?;

        if occupancy.is_full() {
            return Err(ApiError::NoVacancies.into());
        }

        let booking = repo.update_room(booking_id, room_id).await?;
        txn.commit().await?;

        Ok(booking.id)
    }
}

/// A booking body must carry a positive `roomId`; absent or non-positive values
/// are rejected before any query runs.
fn require_room_id(room_id: Option<i32>) -> Result<i32, AppError> {
    room_id
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::Validation("body param roomId is missing".to_string()).into())
}

/// A ticket books a room only when it is paid, in-person, and hotel-inclusive.
/// Any one failing condition blocks the booking with the same forbidden signal.
fn ensure_ticket_can_book(ticket: &TicketWithType) -> Result<(), AppError> {
    let is_remote = ticket.ticket_type.is_remote;
    let not_paid = ticket.ticket.status == TicketStatus::Reserved;
    let not_includes_hotel = !ticket.ticket_type.includes_hotel;

    if is_remote || not_paid || not_includes_hotel {
        return Err(ApiError::Forbidden("ticket is not eligible for booking".to_string()).into());
    }

    Ok(())
}
