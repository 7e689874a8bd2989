//! Domain models and DTOs for room bookings.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::hotel::{Room, RoomDto};

/// A user's room booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            room_id: entity.room_id,
        }
    }
}

/// A booking joined with the room it reserves, as returned by the booking read.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWithRoom {
    pub id: i32,
    pub room: Room,
}

impl BookingWithRoom {
    pub fn into_dto(self) -> BookingWithRoomDto {
        BookingWithRoomDto {
            id: self.id,
            room: self.room.into_dto(),
        }
    }
}

/// A room together with its current number of bookings.
///
/// Loaded inside the reservation transaction so the occupancy the capacity check
/// sees is the occupancy the insert commits against.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomOccupancy {
    pub room: Room,
    pub bookings: u64,
}

impl RoomOccupancy {
    /// A room is full once its booking count has reached capacity.
    pub fn is_full(&self) -> bool {
        self.bookings >= self.room.capacity.max(0) as u64
    }
}

/// Booking with its room. The relation keeps the capitalized `Room` key of the
/// wire format.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookingWithRoomDto {
    pub id: i32,
    #[serde(rename = "Room")]
    pub room: RoomDto,
}

/// Body of booking create/update requests. `room_id` stays optional so an absent
/// value reaches the service's own validation instead of a body-parse rejection.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub room_id: Option<i32>,
}

/// Identifier of the created or updated booking.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingIdDto {
    pub booking_id: i32,
}
