use crate::data::booking::BookingRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_user_id;
mod find_room_with_occupancy;
mod update_room;
