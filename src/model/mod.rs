//! Domain models, operation parameters, and wire DTOs.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. DTOs carry the camelCase wire
//! names of the HTTP surface; domain types stay snake_case Rust.

pub mod api;
pub mod booking;
pub mod hotel;
pub mod payment;
pub mod ticket;
