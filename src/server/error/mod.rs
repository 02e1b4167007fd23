//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for read endpoints. Write endpoints and the university endpoints
//! wrap it in one of the response adapters below, which only change the status
//! mapping and body shape.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::{ApiErrorDto, ErrorDto},
    server::error::config::ConfigError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Business
/// rule violations carry a client-facing message, while database and configuration
/// failures are logged server-side and reported with a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    /// Unique constraint violations are converted into `Duplicate` instead, see the
    /// `From<DbErr>` implementation.
    #[error(transparent)]
    DbErr(DbErr),

    /// Missing or malformed input.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    Validation(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found on reads with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// A unique business identifier is already taken by another record.
    #[error("{0}")]
    Duplicate(String),

    /// The record cannot be deleted or changed while dependent records exist.
    #[error("{0}")]
    Dependency(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Classifies database errors.
///
/// A unique constraint violation means two writers raced past the duplicate check,
/// so it is reported the same way the check itself would have reported it.
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::warn!("Unique constraint violation: {}", detail);
                AppError::Duplicate("A record with the same unique value already exists".to_string())
            }
            _ => AppError::DbErr(err),
        }
    }
}

impl AppError {
    /// Status code used when the error is returned from a read endpoint.
    fn read_status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Duplicate(_) | Self::Dependency(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ConfigErr(_) | Self::DbErr(_) | Self::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::ConfigErr(_) | Self::DbErr(_) | Self::InternalError(_)
        )
    }
}

/// Builds the error response for every adapter.
///
/// Internal failures are logged with full details and reported with a generic message.
/// With `write` set, every failure is reported as 400 Bad Request. With `bare` set,
/// the body is `{ "error": ... }` instead of the `{ "success": false, ... }` envelope.
fn build_response(err: AppError, write: bool, bare: bool) -> Response {
    let status = if write {
        StatusCode::BAD_REQUEST
    } else {
        err.read_status()
    };

    let message = if err.is_internal() {
        tracing::error!("{}", err);
        "Internal server error".to_string()
    } else {
        err.to_string()
    };

    if bare {
        (status, Json(ErrorDto { error: message })).into_response()
    } else {
        (
            status,
            Json(ApiErrorDto {
                success: false,
                error: message,
            }),
        )
            .into_response()
    }
}

/// Converts application errors into HTTP responses for enveloped read endpoints.
///
/// # Returns
/// - 400 Bad Request - For `Validation`, `Duplicate` and `Dependency`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        build_response(self, false, false)
    }
}

/// Error adapter for enveloped write endpoints.
///
/// Every failure of a create, update, delete, transfer or merge is reported as
/// 400 Bad Request.
#[derive(Debug)]
pub struct WriteError(pub AppError);

impl IntoResponse for WriteError {
    fn into_response(self) -> Response {
        build_response(self.0, true, false)
    }
}

impl From<AppError> for WriteError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<DbErr> for WriteError {
    fn from(err: DbErr) -> Self {
        Self(err.into())
    }
}

/// Error adapter for university read endpoints, which respond without the envelope.
#[derive(Debug)]
pub struct UniversityError(pub AppError);

impl IntoResponse for UniversityError {
    fn into_response(self) -> Response {
        build_response(self.0, false, true)
    }
}

impl From<AppError> for UniversityError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<DbErr> for UniversityError {
    fn from(err: DbErr) -> Self {
        Self(err.into())
    }
}

/// Error adapter for university write endpoints.
#[derive(Debug)]
pub struct UniversityWriteError(pub AppError);

impl IntoResponse for UniversityWriteError {
    fn into_response(self) -> Response {
        build_response(self.0, true, true)
    }
}

impl From<AppError> for UniversityWriteError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<DbErr> for UniversityWriteError {
    fn from(err: DbErr) -> Self {
        Self(err.into())
    }
}
