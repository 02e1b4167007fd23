//! University administration backend.
//!
//! REST API over a relational schema of persons, students, applicants, staff users,
//! universities, competitions, applications and academic records.
//!
//! - [`model`] holds the wire DTOs shared by every endpoint.
//! - [`server`] holds the backend: configuration, routing, controllers, services,
//!   repositories and error handling.

pub mod model;
pub mod server;
