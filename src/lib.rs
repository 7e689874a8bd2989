//! Boxoffice — booking and ticketing backend.
//!
//! Users reserve event tickets, pay for them, and, when their ticket type
//! includes hotel accommodation, book hotel rooms. The backend uses Axum as the
//! web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The application follows a layered architecture with clear separation of
//! concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules: the validation guard chains
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models, operation parameters, and DTOs
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token authentication
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes to a controller
//! 2. **Middleware** resolves the bearer token to a user
//! 3. **Controller** converts DTOs, calls the service
//! 4. **Service** runs its guard chain and orchestrates data operations
//! 5. **Data** queries the database, converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and answers

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
