//! Payment data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::payment::{CreatePaymentRecord, Payment};

pub struct PaymentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the payment recorded for a ticket, if any.
    pub async fn find_by_ticket_id(&self, ticket_id: i32) -> Result<Option<Payment>, DbErr> {
        let payment = entity::prelude::Payment::find()
            .filter(entity::payment::Column::TicketId.eq(ticket_id))
            .one(self.db)
            .await?;

        Ok(payment.map(Payment::from_entity))
    }

    /// Inserts a payment row. The record already carries the priced value and the
    /// truncated card digits; nothing else about the card is stored.
    pub async fn create(&self, record: CreatePaymentRecord) -> Result<Payment, DbErr> {
        let payment = entity::payment::ActiveModel {
            ticket_id: ActiveValue::Set(record.ticket_id),
            value: ActiveValue::Set(record.value),
            card_issuer: ActiveValue::Set(record.card_issuer),
            card_last_digits: ActiveValue::Set(record.card_last_digits),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(payment))
    }
}
