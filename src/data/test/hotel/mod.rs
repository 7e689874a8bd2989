use crate::data::hotel::HotelRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_all;
mod find_with_rooms;
