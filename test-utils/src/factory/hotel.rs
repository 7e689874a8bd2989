//! Hotel factory for creating test hotels.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a hotel with a generated name and image URL.
pub async fn create_hotel(db: &DatabaseConnection) -> Result<entity::hotel::Model, DbErr> {
    let id = next_id();
    entity::hotel::ActiveModel {
        name: ActiveValue::Set(format!("Hotel {}", id)),
        image: ActiveValue::Set(format!("https://images.boxoffice.test/hotel-{}.jpg", id)),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
