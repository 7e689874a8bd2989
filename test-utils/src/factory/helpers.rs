//! Shared helper utilities for factory methods.

use entity::ticket::TicketStatus;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique identifiers in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Monotonically increasing across all factories, so generated identifiers never
/// collide within a test process.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user with an enrollment and a ticket of a freshly created type.
///
/// The ticket type flags and the ticket status are caller-controlled, which is
/// what the eligibility guard tests need.
///
/// # Arguments
/// - `db` - Database connection
/// - `status` - Status of the created ticket
/// - `is_remote` - Whether the ticket type is remote
/// - `includes_hotel` - Whether the ticket type includes hotel accommodation
///
/// # Returns
/// - `Ok((user, enrollment, ticket_type, ticket))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_ticket_with_dependencies(
    db: &DatabaseConnection,
    status: TicketStatus,
    is_remote: bool,
    includes_hotel: bool,
) -> Result<
    (
        entity::user::Model,
        entity::enrollment::Model,
        entity::ticket_type::Model,
        entity::ticket::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let enrollment = crate::factory::enrollment::create_enrollment(db, user.id).await?;
    let ticket_type = crate::factory::ticket_type::TicketTypeFactory::new(db)
        .is_remote(is_remote)
        .includes_hotel(includes_hotel)
        .build()
        .await?;
    let ticket =
        crate::factory::ticket::create_ticket(db, enrollment.id, ticket_type.id, status).await?;

    Ok((user, enrollment, ticket_type, ticket))
}

/// Creates a user holding a paid, in-person, hotel-inclusive ticket.
///
/// This is the configuration that passes every booking and hotel access guard.
pub async fn create_paid_hotel_ticket(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::enrollment::Model,
        entity::ticket_type::Model,
        entity::ticket::Model,
    ),
    DbErr,
> {
    create_ticket_with_dependencies(db, TicketStatus::Paid, false, true).await
}

/// Creates a hotel with one room of the given capacity.
pub async fn create_hotel_with_room(
    db: &DatabaseConnection,
    capacity: i32,
) -> Result<(entity::hotel::Model, entity::room::Model), DbErr> {
    let hotel = crate::factory::hotel::create_hotel(db).await?;
    let room = crate::factory::room::create_room(db, hotel.id, capacity).await?;

    Ok((hotel, room))
}
