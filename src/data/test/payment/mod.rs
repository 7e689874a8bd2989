use crate::{data::payment::PaymentRepository, model::payment::CreatePaymentRecord};
use entity::ticket::TicketStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_ticket_id;
