//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories are generic over `ConnectionTrait` so the same
//! queries run against the connection pool or inside a `DatabaseTransaction`. Every read
//! shape is an explicit query function; related rows are batch-loaded with `IN` queries
//! and stitched together in memory.

pub mod academic;
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
