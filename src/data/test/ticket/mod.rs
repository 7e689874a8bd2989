use crate::{
    data::ticket::TicketRepository,
    model::ticket::{CreateTicketParams, TicketStatus},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_user_id;
mod ownership;
mod set_paid;
mod types;
