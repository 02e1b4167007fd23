//! Server-side domain models and parameter types.
//!
//! This module contains the records returned by repositories and the parameter types
//! consumed by services. Parameter types are built from request DTOs at the controller
//! boundary, where required fields and enum literals are validated. Records hold entity
//! models together with their related rows and are transformed to DTOs on the way out.

pub mod academic;
pub mod annual_result;
pub mod applicant;
pub mod application;
pub mod competition;
pub mod person;
pub mod student;
pub mod university;
pub mod user;

/// Treats a missing value and a blank string the same way.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
