//! Domain models and DTOs for ticket payments.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A recorded payment. Holds the card issuer and last four digits only; the full
/// card number is discarded before anything reaches the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub ticket_id: i32,
    pub value: i32,
    pub card_issuer: String,
    pub card_last_digits: String,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            ticket_id: entity.ticket_id,
            value: entity.value,
            card_issuer: entity.card_issuer,
            card_last_digits: entity.card_last_digits,
        }
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            ticket_id: self.ticket_id,
            value: self.value,
            card_issuer: self.card_issuer,
            card_last_digits: self.card_last_digits,
        }
    }
}

/// Card details submitted with a payment. Only `issuer` and the last four digits
/// of `number` survive past the service layer.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub issuer: String,
    pub number: i64,
    pub name: String,
    pub expiration_date: String,
    pub cvv: i32,
}

impl CardData {
    /// Last four digits of the card number, zero-padded for short test numbers.
    pub fn last_digits(&self) -> String {
        let digits = format!("{:04}", self.number.unsigned_abs());
        digits[digits.len() - 4..].to_string()
    }
}

/// Row-level parameters for inserting a payment, after pricing and card
/// truncation have been applied.
#[derive(Debug, Clone)]
pub struct CreatePaymentRecord {
    pub ticket_id: i32,
    pub value: i32,
    pub card_issuer: String,
    pub card_last_digits: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: i32,
    pub ticket_id: i32,
    pub value: i32,
    pub card_issuer: String,
    pub card_last_digits: String,
}

/// Body of the payment process request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentDto {
    pub ticket_id: Option<i32>,
    pub card_data: CardData,
}
