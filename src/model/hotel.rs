//! Domain models and DTOs for hotels and rooms.

use serde::Serialize;
use utoipa::ToSchema;

/// A hotel offered to holders of hotel-inclusive paid tickets.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub image: String,
}

impl Hotel {
    pub fn from_entity(entity: entity::hotel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            image: entity.image,
        }
    }

    pub fn into_dto(self) -> HotelDto {
        HotelDto {
            id: self.id,
            name: self.name,
            image: self.image,
        }
    }
}

/// A room inside a hotel. `capacity` is the number of bookings the room accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
}

impl Room {
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            capacity: entity.capacity,
            hotel_id: entity.hotel_id,
        }
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            name: self.name,
            capacity: self.capacity,
            hotel_id: self.hotel_id,
        }
    }
}

/// A hotel together with all of its rooms, as returned by the single-hotel read.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

impl HotelWithRooms {
    pub fn into_dto(self) -> HotelWithRoomsDto {
        HotelWithRoomsDto {
            id: self.hotel.id,
            name: self.hotel.name,
            image: self.hotel.image,
            rooms: self.rooms.into_iter().map(Room::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HotelDto {
    pub id: i32,
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
}

/// Hotel with its rooms. The relation keeps the capitalized `Rooms` key of the
/// wire format.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HotelWithRoomsDto {
    pub id: i32,
    pub name: String,
    pub image: String,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomDto>,
}
