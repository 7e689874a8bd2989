//! Ticket payment business logic.
//!
//! Reading a payment checks ownership of the ticket it pays for; processing a
//! payment flips the ticket to PAID and records the payment in one transaction,
//! pricing it from the ticket type and keeping only the card issuer and last
//! four digits.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{payment::PaymentRepository, ticket::TicketRepository},
    error::{api::ApiError, AppError},
    model::{
        payment::{CardData, CreatePaymentRecord, Payment},
        ticket::TicketStatus,
    },
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the payment recorded for a ticket.
    ///
    /// # Returns
    /// - `Ok(Payment)` - The ticket's payment
    /// - `Err(ApiError::Validation)` - `ticketId` missing from the query
    /// - `Err(ApiError::NotFound)` - No payment recorded for that ticket
    /// - `Err(ApiError::Unauthorized)` - Ticket belongs to another user
    pub async fn get_payment(
        &self,
        ticket_id: Option<i32>,
        user_id: i32,
    ) -> Result<Payment, AppError> {
        let ticket_id = require_ticket_id(ticket_id)?;

        let payment = PaymentRepository::new(self.db)
            .find_by_ticket_id(ticket_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("no payment found for ticket".to_string()))?;

        let owned = TicketRepository::new(self.db)
            .belongs_to_user(ticket_id, user_id)
            .await?;
        if !owned {
            return Err(
                ApiError::Unauthorized("ticket does not belong to caller".to_string()).into(),
            );
        }

        Ok(payment)
    }

    /// Processes a payment for the caller's ticket.
    ///
    /// Guard chain, in order:
    /// 1. `ticketId` must be present and positive.
    /// 2. The ticket must exist.
    /// 3. The ticket must belong to the caller.
    /// 4. The ticket must still be RESERVED; paying twice is rejected.
    ///
    /// The status flip and the payment insert share one transaction, so a paid
    /// ticket always has its payment row and vice versa.
    ///
    /// # Returns
    /// - `Ok(Payment)` - The recorded payment, priced from the ticket type
    /// - `Err(AppError)` - First failing guard, mapped per kind
    pub async fn create_payment(
        &self,
        ticket_id: Option<i32>,
        card_data: CardData,
        user_id: i32,
    ) -> Result<Payment, AppError> {
        let ticket_id = require_ticket_id(ticket_id)?;
        let ticket_repo = TicketRepository::new(self.db);

        let ticket = ticket_repo
            .find_by_id(ticket_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("ticket not found".to_string()))?;

        if !ticket_repo.belongs_to_user(ticket_id, user_id).await? {
            return Err(
                ApiError::Unauthorized("ticket does not belong to caller".to_string()).into(),
            );
        }

        if ticket.ticket.status == TicketStatus::Paid {
            return Err(ApiError::Forbidden("ticket is already paid".to_string()).into());
        }

        let txn = self.db.begin().await?;

        let paid = TicketRepository::new(&txn).set_paid(ticket_id).await?;
        let payment = PaymentRepository::new(&txn)
            .create(CreatePaymentRecord {
                ticket_id,
                value: paid.ticket_type.price,
                card_issuer: card_data.issuer.clone(),
                card_last_digits: card_data.last_digits(),
            })
            .await?;

        txn.commit().await?;

        Ok(payment)
    }
}

fn require_ticket_id(ticket_id: Option<i32>) -> Result<i32, AppError> {
    ticket_id
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::Validation("param ticketId is missing".to_string()).into())
}
