//! Domain models and DTOs for tickets, ticket types, and enrollments.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ticket lifecycle status at the domain layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Reserved,
    Paid,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reserved => "RESERVED",
            Self::Paid => "PAID",
        }
    }
}

impl From<entity::ticket::TicketStatus> for TicketStatus {
    fn from(status: entity::ticket::TicketStatus) -> Self {
        match status {
            entity::ticket::TicketStatus::Reserved => Self::Reserved,
            entity::ticket::TicketStatus::Paid => Self::Paid,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub ticket_type_id: i32,
    pub enrollment_id: i32,
    pub status: TicketStatus,
}

impl Ticket {
    pub fn from_entity(entity: entity::ticket::Model) -> Self {
        Self {
            id: entity.id,
            ticket_type_id: entity.ticket_type_id,
            enrollment_id: entity.enrollment_id,
            status: entity.status.into(),
        }
    }
}

/// A purchasable ticket category. The `is_remote` and `includes_hotel` flags feed
/// the booking and hotel eligibility guards; `price` is in cents.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketType {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl TicketType {
    pub fn from_entity(entity: entity::ticket_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            is_remote: entity.is_remote,
            includes_hotel: entity.includes_hotel,
        }
    }

    pub fn into_dto(self) -> TicketTypeDto {
        TicketTypeDto {
            id: self.id,
            name: self.name,
            price: self.price,
            is_remote: self.is_remote,
            includes_hotel: self.includes_hotel,
        }
    }
}

/// A ticket joined with its type, the shape every eligibility guard works on.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketWithType {
    pub ticket: Ticket,
    pub ticket_type: TicketType,
}

impl TicketWithType {
    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.ticket.id,
            status: self.ticket.status.as_str().to_string(),
            ticket_type_id: self.ticket.ticket_type_id,
            enrollment_id: self.ticket.enrollment_id,
            ticket_type: self.ticket_type.into_dto(),
        }
    }
}

/// A user's registration record; holding one gates ticket purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
}

impl Enrollment {
    pub fn from_entity(entity: entity::enrollment::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
        }
    }
}

/// Parameters for creating a ticket once the enrollment guard has passed.
#[derive(Debug, Clone)]
pub struct CreateTicketParams {
    pub ticket_type_id: i32,
    pub enrollment_id: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypeDto {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

/// Ticket with its type. The relation keeps the capitalized `TicketType` key of
/// the wire format.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    pub id: i32,
    pub status: String,
    pub ticket_type_id: i32,
    pub enrollment_id: i32,
    #[serde(rename = "TicketType")]
    pub ticket_type: TicketTypeDto,
}

/// Body of the ticket creation request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketDto {
    pub ticket_type_id: i32,
}
