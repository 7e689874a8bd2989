//! Payment factory for creating test payment rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a payment for the ticket with the given value.
pub async fn create_payment(
    db: &DatabaseConnection,
    ticket_id: i32,
    value: i32,
) -> Result<entity::payment::Model, DbErr> {
    entity::payment::ActiveModel {
        ticket_id: ActiveValue::Set(ticket_id),
        value: ActiveValue::Set(value),
        card_issuer: ActiveValue::Set("VISA".to_string()),
        card_last_digits: ActiveValue::Set("4242".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
