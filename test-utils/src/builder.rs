use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory
/// SQLite databases. Add entity tables with `with_table()` (in dependency order:
/// referenced tables before tables holding the foreign key), then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Session};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Session)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, generated from
    /// entity models and executed in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using
    /// SQLite backend syntax. Tables should be added in dependency order.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for ticket operations: User, Enrollment,
    /// TicketType, and Ticket.
    pub fn with_ticket_tables(self) -> Self {
        self.with_table(User)
            .with_table(Enrollment)
            .with_table(TicketType)
            .with_table(Ticket)
    }

    /// Adds the tables required for payment operations: the ticket tables plus
    /// Payment.
    pub fn with_payment_tables(self) -> Self {
        self.with_ticket_tables().with_table(Payment)
    }

    /// Adds the tables required for hotel reads: the ticket tables plus Hotel
    /// and Room.
    pub fn with_hotel_tables(self) -> Self {
        self.with_ticket_tables().with_table(Hotel).with_table(Room)
    }

    /// Adds the tables required for booking operations: the hotel tables plus
    /// Booking.
    pub fn with_booking_tables(self) -> Self {
        self.with_hotel_tables().with_table(Booking)
    }

    /// Adds the tables required for authenticating requests: User and Session.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User).with_table(Session)
    }

    /// Builds the configured test context.
    ///
    /// Connects to a fresh in-memory SQLite database and creates every table
    /// added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with connected database and created tables
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
