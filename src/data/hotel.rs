//! Hotel data repository for database operations.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::hotel::{Hotel, HotelWithRooms, Room};

pub struct HotelRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HotelRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists every hotel, ordered by name.
    pub async fn find_all(&self) -> Result<Vec<Hotel>, DbErr> {
        let hotels = entity::prelude::Hotel::find()
            .order_by_asc(entity::hotel::Column::Name)
            .all(self.db)
            .await?;

        Ok(hotels.into_iter().map(Hotel::from_entity).collect())
    }

    /// Loads one hotel together with all of its rooms.
    ///
    /// # Returns
    /// - `Ok(Some(HotelWithRooms))` - Hotel found, rooms may be empty
    /// - `Ok(None)` - No hotel with that id
    /// - `Err(DbErr)` - Database error
    pub async fn find_with_rooms(&self, hotel_id: i32) -> Result<Option<HotelWithRooms>, DbErr> {
        let Some(hotel) = entity::prelude::Hotel::find_by_id(hotel_id).one(self.db).await? else {
            return Ok(None);
        };

        let rooms = entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .order_by_asc(entity::room::Column::Name)
            .all(self.db)
            .await?;

        Ok(Some(HotelWithRooms {
            hotel: Hotel::from_entity(hotel),
            rooms: rooms.into_iter().map(Room::from_entity).collect(),
        }))
    }
}
