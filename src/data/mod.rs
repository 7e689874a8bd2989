//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and
//! convert to domain models at the boundary, so the service layer never touches
//! entity types. Repositories are generic over [`sea_orm::ConnectionTrait`] so the
//! same queries run against the pooled connection or inside a transaction opened by
//! a service.

pub mod booking;
pub mod hotel;
pub mod payment;
pub mod session;
pub mod ticket;

#[cfg(test)]
mod test;
