//! HTTP request handlers.
//!
//! Handlers convert request DTOs into parameter types, call the matching service and
//! wrap the result in the response envelope. Read handlers return `AppError`, write
//! handlers return `WriteError`, which reports every failure as 400 Bad Request.

pub mod annual_result;
pub mod applicant;
pub mod application;
pub mod competition;
pub mod person;
pub mod student;
pub mod university;
pub mod user;
