//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and `create_*` convenience functions for quick default
//! creation. Factories insert real rows, so callers must have created the
//! referenced tables (and parent rows) first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let hotel = factory::hotel::create_hotel(&db).await?;
//!
//!     // Create a paid, hotel-inclusive ticket with all dependencies
//!     let (user, _enrollment, _ticket_type, ticket) =
//!         factory::helpers::create_paid_hotel_ticket(&db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod booking;
pub mod enrollment;
pub mod helpers;
pub mod hotel;
pub mod payment;
pub mod room;
pub mod session;
pub mod ticket;
pub mod ticket_type;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use enrollment::create_enrollment;
pub use hotel::create_hotel;
pub use payment::create_payment;
pub use room::create_room;
pub use session::create_session;
pub use ticket::create_ticket;
pub use ticket_type::{create_hotel_ticket_type, create_remote_ticket_type};
pub use user::create_user;
