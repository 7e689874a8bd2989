//! Booking data repository for database operations.
//!
//! Provides the `BookingRepository` for reading a user's booking, inspecting room
//! occupancy, and inserting or re-pointing booking rows. The occupancy read and the
//! subsequent write are expected to share a transaction; the service layer opens it
//! and constructs the repository over the transaction handle.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::model::{
    booking::{Booking, BookingWithRoom, RoomOccupancy},
    hotel::Room,
};

pub struct BookingRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user's booking together with the room it reserves.
    ///
    /// # Returns
    /// - `Ok(Some(BookingWithRoom))` - The user's booking and its room
    /// - `Ok(None)` - The user has no booking
    /// - `Err(DbErr)` - Database error, or a booking row without a room
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<BookingWithRoom>, DbErr> {
        let result = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Room)
            .one(self.db)
            .await?;

        match result {
            Some((booking, Some(room))) => Ok(Some(BookingWithRoom {
                id: booking.id,
                room: Room::from_entity(room),
            })),
            Some((booking, None)) => Err(DbErr::RecordNotFound(format!(
                "Room {} referenced by booking {} not found",
                booking.room_id, booking.id
            ))),
            None => Ok(None),
        }
    }

    /// Loads a room together with its current booking count.
    ///
    /// Run inside the reservation transaction so the count cannot drift between
    /// the capacity check and the insert.
    pub async fn find_room_with_occupancy(
        &self,
        room_id: i32,
    ) -> Result<Option<RoomOccupancy>, DbErr> {
        let Some(room) = entity::prelude::Room::find_by_id(room_id).one(self.db).await? else {
            return Ok(None);
        };

        let bookings = entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomId.eq(room_id))
            .count(self.db)
            .await?;

        Ok(Some(RoomOccupancy {
            room: Room::from_entity(room),
            bookings,
        }))
    }

    /// Inserts a booking for the user in the given room.
    pub async fn create(&self, room_id: i32, user_id: i32) -> Result<Booking, DbErr> {
        let now = Utc::now();
        let booking = entity::booking::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            room_id: ActiveValue::Set(room_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(booking))
    }

    /// Re-points an existing booking at a different room.
    pub async fn update_room(&self, booking_id: i32, room_id: i32) -> Result<Booking, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(booking_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Booking with id {} not found",
                booking_id
            )))?;

        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.room_id = ActiveValue::Set(room_id);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let booking = active_model.update(self.db).await?;

        Ok(Booking::from_entity(booking))
    }
}
