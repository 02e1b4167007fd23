//! Wire DTOs for the HTTP API.
//!
//! Request bodies use optional fields throughout so missing values surface as
//! validation errors with readable messages instead of deserialization rejections.

pub mod academic;
pub mod annual_result;
pub mod api;
pub mod applicant;
pub mod application;
pub mod competition;
pub mod person;
pub mod student;
pub mod university;
pub mod user;
