//! Booking factory for creating test bookings.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a booking for the user in the room.
///
/// Inserts the row directly, bypassing the service-layer capacity check; tests
/// use this to stage rooms at or near capacity.
pub async fn create_booking(
    db: &DatabaseConnection,
    room_id: i32,
    user_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    let now = Utc::now();
    entity::booking::ActiveModel {
        room_id: ActiveValue::Set(room_id),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
