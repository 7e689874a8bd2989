//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer. They own the guard chains that decide whether an operation may proceed:
//! ticket eligibility for room booking, paid-ticket access to hotels, payment
//! ownership, and enrollment gating of ticket creation. Every operation is
//! all-or-nothing relative to its guard chain; the capacity-sensitive booking
//! steps run inside a single transaction.

pub mod booking;
pub mod hotel;
pub mod payment;
pub mod ticket;
