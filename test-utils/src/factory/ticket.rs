//! Ticket factory for creating test tickets.

use chrono::Utc;
use entity::ticket::TicketStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a ticket for the enrollment with the given type and status.
///
/// Status is caller-controlled so tests can exercise both RESERVED and PAID
/// paths without going through the payment process.
pub async fn create_ticket(
    db: &DatabaseConnection,
    enrollment_id: i32,
    ticket_type_id: i32,
    status: TicketStatus,
) -> Result<entity::ticket::Model, DbErr> {
    let now = Utc::now();
    entity::ticket::ActiveModel {
        enrollment_id: ActiveValue::Set(enrollment_id),
        ticket_type_id: ActiveValue::Set(ticket_type_id),
        status: ActiveValue::Set(status),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
