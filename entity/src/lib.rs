//! SeaORM entity models for the boxoffice database schema.
//!
//! One module per table. Domain models live in the main crate; these types stay at
//! the persistence boundary and are converted at the repository layer.

pub mod prelude;

pub mod booking;
pub mod enrollment;
pub mod hotel;
pub mod payment;
pub mod room;
pub mod session;
pub mod ticket;
pub mod ticket_type;
pub mod user;
