//! HTTP request handlers.
//!
//! Controllers translate requests into service calls and domain models into
//! DTOs. Status-code mapping for failures lives on the error types themselves;
//! handlers only pick the success status.

pub mod booking;
pub mod hotel;
pub mod payment;
pub mod ticket;
