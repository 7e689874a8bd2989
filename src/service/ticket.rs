//! Ticket business logic.
//!
//! Ticket creation is gated by enrollment: a user registers once, and only then
//! may reserve a ticket. Tickets start RESERVED; payment flips them to PAID.

use sea_orm::DatabaseConnection;

use crate::{
    data::ticket::TicketRepository,
    error::{api::ApiError, AppError},
    model::ticket::{CreateTicketParams, TicketType, TicketWithType},
};

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's ticket with its type.
    ///
    /// # Returns
    /// - `Ok(TicketWithType)` - The user's ticket
    /// - `Err(ApiError::NotFound)` - User has no ticket
    pub async fn get_ticket(&self, user_id: i32) -> Result<TicketWithType, AppError> {
        let ticket = TicketRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("no ticket found for user".to_string()))?;

        Ok(ticket)
    }

    /// Lists every ticket type. An empty catalogue is an empty list, not an error.
    pub async fn list_ticket_types(&self) -> Result<Vec<TicketType>, AppError> {
        let types = TicketRepository::new(self.db).find_all_types().await?;

        Ok(types)
    }

    /// Reserves a ticket of the given type for the user.
    ///
    /// Requires an existing enrollment and an existing ticket type; the created
    /// ticket starts in RESERVED status.
    ///
    /// # Returns
    /// - `Ok(TicketWithType)` - The reserved ticket
    /// - `Err(ApiError::NotFound)` - User not enrolled, or ticket type absent
    pub async fn create_ticket(
        &self,
        ticket_type_id: i32,
        user_id: i32,
    ) -> Result<TicketWithType, AppError> {
        let repo = TicketRepository::new(self.db);

        let enrollment = repo
            .find_enrollment_by_user_id(user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("no enrollment found for user".to_string()))?;

        repo.find_type_by_id(ticket_type_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("ticket type not found".to_string()))?;

        let ticket = repo
            .create(CreateTicketParams {
                ticket_type_id,
                enrollment_id: enrollment.id,
            })
            .await?;

        Ok(ticket)
    }
}
