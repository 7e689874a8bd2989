//! Ticket type factory for creating test ticket categories.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating ticket types with customizable eligibility flags.
///
/// Defaults to an in-person, hotel-inclusive type, the configuration that passes
/// every guard; flip `is_remote` / `includes_hotel` to produce ineligible types.
pub struct TicketTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price: i32,
    is_remote: bool,
    includes_hotel: bool,
}

impl<'a> TicketTypeFactory<'a> {
    /// Creates a new TicketTypeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Ticket Type {id}"` where id is auto-incremented
    /// - price: 25000 (cents)
    /// - is_remote: `false`
    /// - includes_hotel: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Ticket Type {}", next_id()),
            price: 25000,
            is_remote: false,
            includes_hotel: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    pub fn is_remote(mut self, is_remote: bool) -> Self {
        self.is_remote = is_remote;
        self
    }

    pub fn includes_hotel(mut self, includes_hotel: bool) -> Self {
        self.includes_hotel = includes_hotel;
        self
    }

    /// Builds and inserts the ticket type entity into the database.
    pub async fn build(self) -> Result<entity::ticket_type::Model, DbErr> {
        entity::ticket_type::ActiveModel {
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            is_remote: ActiveValue::Set(self.is_remote),
            includes_hotel: ActiveValue::Set(self.includes_hotel),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an in-person, hotel-inclusive ticket type.
pub async fn create_hotel_ticket_type(
    db: &DatabaseConnection,
) -> Result<entity::ticket_type::Model, DbErr> {
    TicketTypeFactory::new(db).build().await
}

/// Creates a remote ticket type (never hotel-inclusive).
pub async fn create_remote_ticket_type(
    db: &DatabaseConnection,
) -> Result<entity::ticket_type::Model, DbErr> {
    TicketTypeFactory::new(db)
        .is_remote(true)
        .includes_hotel(false)
        .build()
        .await
}

/// Creates an in-person ticket type without hotel accommodation.
pub async fn create_no_hotel_ticket_type(
    db: &DatabaseConnection,
) -> Result<entity::ticket_type::Model, DbErr> {
    TicketTypeFactory::new(db).includes_hotel(false).build().await
}
