//! Ticket data repository for database operations.
//!
//! Handles tickets, ticket types, and the enrollment lookups that gate ticket
//! creation. Tickets are almost always read joined with their type, since every
//! eligibility guard needs the type's `is_remote` / `includes_hotel` flags.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::ticket::{CreateTicketParams, Enrollment, Ticket, TicketType, TicketWithType};

pub struct TicketRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the user's ticket (via their enrollment) joined with its type.
    ///
    /// # Returns
    /// - `Ok(Some(TicketWithType))` - The user's ticket and type
    /// - `Ok(None)` - User has no enrollment or no ticket
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<TicketWithType>, DbErr> {
        let Some(enrollment) = self.find_enrollment_entity(user_id).await? else {
            return Ok(None);
        };

        let result = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::EnrollmentId.eq(enrollment.id))
            .find_also_related(entity::prelude::TicketType)
            .one(self.db)
            .await?;

        Self::zip_with_type(result)
    }

    /// Finds a ticket by id joined with its type, regardless of owner.
    pub async fn find_by_id(&self, ticket_id: i32) -> Result<Option<TicketWithType>, DbErr> {
        let result = entity::prelude::Ticket::find_by_id(ticket_id)
            .find_also_related(entity::prelude::TicketType)
            .one(self.db)
            .await?;

        Self::zip_with_type(result)
    }

    /// Checks whether a ticket belongs to the given user via its enrollment.
    pub async fn belongs_to_user(&self, ticket_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let Some(ticket) = entity::prelude::Ticket::find_by_id(ticket_id)
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let enrollment = entity::prelude::Enrollment::find_by_id(ticket.enrollment_id)
            .one(self.db)
            .await?;

        Ok(enrollment.is_some_and(|e| e.user_id == user_id))
    }

    /// Flips a ticket to PAID and returns it with its type.
    pub async fn set_paid(&self, ticket_id: i32) -> Result<TicketWithType, DbErr> {
        let ticket = entity::prelude::Ticket::find_by_id(ticket_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Ticket with id {} not found",
                ticket_id
            )))?;

        let mut active_model: entity::ticket::ActiveModel = ticket.into();
        active_model.status = ActiveValue::Set(entity::ticket::TicketStatus::Paid);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let ticket = active_model.update(self.db).await?;
        let ticket_type = self.find_type_entity(ticket.ticket_type_id).await?;

        Ok(TicketWithType {
            ticket: Ticket::from_entity(ticket),
            ticket_type: TicketType::from_entity(ticket_type),
        })
    }

    /// Creates a RESERVED ticket for an enrollment and returns it with its type.
    pub async fn create(&self, params: CreateTicketParams) -> Result<TicketWithType, DbErr> {
        let now = Utc::now();
        let ticket = entity::ticket::ActiveModel {
            ticket_type_id: ActiveValue::Set(params.ticket_type_id),
            enrollment_id: ActiveValue::Set(params.enrollment_id),
            status: ActiveValue::Set(entity::ticket::TicketStatus::Reserved),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let ticket_type = self.find_type_entity(ticket.ticket_type_id).await?;

        Ok(TicketWithType {
            ticket: Ticket::from_entity(ticket),
            ticket_type: TicketType::from_entity(ticket_type),
        })
    }

    /// Finds the user's enrollment.
    pub async fn find_enrollment_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<Enrollment>, DbErr> {
        let enrollment = self.find_enrollment_entity(user_id).await?;

        Ok(enrollment.map(Enrollment::from_entity))
    }

    /// Finds a ticket type by id.
    pub async fn find_type_by_id(&self, ticket_type_id: i32) -> Result<Option<TicketType>, DbErr> {
        let ticket_type = entity::prelude::TicketType::find_by_id(ticket_type_id)
            .one(self.db)
            .await?;

        Ok(ticket_type.map(TicketType::from_entity))
    }

    /// Lists every ticket type, ordered by name.
    pub async fn find_all_types(&self) -> Result<Vec<TicketType>, DbErr> {
        let types = entity::prelude::TicketType::find()
            .order_by_asc(entity::ticket_type::Column::Name)
            .all(self.db)
            .await?;

        Ok(types.into_iter().map(TicketType::from_entity).collect())
    }

    async fn find_enrollment_entity(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::enrollment::Model>, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    async fn find_type_entity(
        &self,
        ticket_type_id: i32,
    ) -> Result<entity::ticket_type::Model, DbErr> {
        entity::prelude::TicketType::find_by_id(ticket_type_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Ticket type with id {} not found",
                ticket_type_id
            )))
    }

    fn zip_with_type(
        result: Option<(entity::ticket::Model, Option<entity::ticket_type::Model>)>,
    ) -> Result<Option<TicketWithType>, DbErr> {
        match result {
            Some((ticket, Some(ticket_type))) => Ok(Some(TicketWithType {
                ticket: Ticket::from_entity(ticket),
                ticket_type: TicketType::from_entity(ticket_type),
            })),
            Some((ticket, None)) => Err(DbErr::RecordNotFound(format!(
                "Ticket type {} referenced by ticket {} not found",
                ticket.ticket_type_id, ticket.id
            ))),
            None => Ok(None),
        }
    }
}
