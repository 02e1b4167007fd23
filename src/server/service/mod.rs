//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Duplicate and dependency guards, status transitions
//! - **Orchestration**: Coordinating multiple repository calls per operation
//! - **Domain Models**: Working with domain records rather than DTOs or entity models
//! - **Transaction Management**: Every multi-row write runs in one database transaction,
//!   committed on success and rolled back on failure

pub mod annual_result;
pub mod applicant;
pub mod application;
pub mod competition;
pub mod person;
pub mod student;
pub mod university;
pub mod user;

#[cfg(test)]
mod test;
