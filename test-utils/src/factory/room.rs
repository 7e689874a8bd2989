//! Room factory for creating test rooms.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a room in the hotel with the given capacity.
///
/// Capacity is caller-controlled because most booking tests pivot on how many
/// free slots the room has left.
pub async fn create_room(
    db: &DatabaseConnection,
    hotel_id: i32,
    capacity: i32,
) -> Result<entity::room::Model, DbErr> {
    entity::room::ActiveModel {
        name: ActiveValue::Set(format!("{}", 1000 + next_id())),
        capacity: ActiveValue::Set(capacity),
        hotel_id: ActiveValue::Set(hotel_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn creates_room_with_capacity() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let hotel = factory::create_hotel(db).await?;
        let room = create_room(db, hotel.id, 2).await?;

        assert_eq!(room.hotel_id, hotel.id);
        assert_eq!(room.capacity, 2);

        Ok(())
    }
}
