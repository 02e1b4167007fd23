//! Factories for inserting test entities with sensible defaults.
//!
//! Each module exposes a builder-style factory for the entities tests customize often
//! and `create_*` shortcuts for the common case. Unique columns (codes, emails, numbers)
//! are derived from a shared counter so repeated calls never collide.

pub mod academic;
pub mod applicant;
pub mod application;
pub mod competition;
pub mod helpers;
pub mod news;
pub mod person;
pub mod registration;
pub mod student;
pub mod student_card;
pub mod university;
pub mod user;
