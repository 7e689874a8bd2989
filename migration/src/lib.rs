pub use sea_orm_migration::prelude::*;

mod m20250705_000001_create_user_table;
mod m20250705_000002_create_session_table;
mod m20250705_000003_create_enrollment_table;
mod m20250706_000004_create_ticket_type_table;
mod m20250706_000005_create_ticket_table;
mod m20250707_000006_create_payment_table;
mod m20250708_000007_create_hotel_table;
mod m20250708_000008_create_room_table;
mod m20250708_000009_create_booking_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250705_000001_create_user_table::Migration),
            Box::new(m20250705_000002_create_session_table::Migration),
            Box::new(m20250705_000003_create_enrollment_table::Migration),
            Box::new(m20250706_000004_create_ticket_type_table::Migration),
            Box::new(m20250706_000005_create_ticket_table::Migration),
            Box::new(m20250707_000006_create_payment_table::Migration),
            Box::new(m20250708_000007_create_hotel_table::Migration),
            Box::new(m20250708_000008_create_room_table::Migration),
            Box::new(m20250708_000009_create_booking_table::Migration),
        ]
    }
}
