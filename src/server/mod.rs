//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, boundary validation, DTO conversion
//! - **Service Layer** (`service/`) - Business rules, transactions, duplicate and dependency guards
//! - **Data Layer** (`data/`) - Database queries, one function per read shape
//! - **Model Layer** (`model/`) - Domain records and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Route table and OpenAPI documentation
//! - **Util** (`util/`) - Enum parsing, search term rules, transactions, dates
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** validates required fields, converts DTOs to params, calls service
//! 3. **Service** executes business logic, opening a transaction for multi-row writes
//! 4. **Data** queries database and returns entity records
//! 5. **Service** returns domain records to controller
//! 6. **Controller** converts records to DTOs and wraps them in the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
