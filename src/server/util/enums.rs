use sea_orm::{ActiveEnum, Iterable};

use crate::server::error::AppError;

/// Parses a string into one of the allowed values of a stored enumeration.
///
/// # Arguments
/// - `label` - Field name used in the error message, e.g. `"Status"`
/// - `value` - Raw value received from the client
///
/// # Returns
/// - `Ok(E)` - The matching enum value
/// - `Err(AppError::Validation)` - "`label` must be one of: a, b, c"
pub fn parse_enum<E>(label: &str, value: &str) -> Result<E, AppError>
where
    E: ActiveEnum<Value = String> + Iterable,
{
    E::try_from_value(&value.to_string())
        .map_err(|_| AppError::Validation(format!("{} must be one of: {}", label, allowed::<E>())))
}

/// Parses an optional value, keeping `None` as `None`.
pub fn parse_optional_enum<E>(label: &str, value: Option<&str>) -> Result<Option<E>, AppError>
where
    E: ActiveEnum<Value = String> + Iterable,
{
    value.map(|v| parse_enum::<E>(label, v)).transpose()
}

/// Parses a value that must be present, as in a status patch body.
pub fn parse_required_enum<E>(label: &str, value: Option<&str>) -> Result<E, AppError>
where
    E: ActiveEnum<Value = String> + Iterable,
{
    let value = value.ok_or_else(|| AppError::Validation(format!("{} is required", label)))?;

    parse_enum::<E>(label, value)
}

/// Comma separated list of the stored values of `E`.
pub fn allowed<E>() -> String
where
    E: ActiveEnum<Value = String> + Iterable,
{
    E::iter()
        .map(|v| v.to_value())
        .collect::<Vec<_>>()
        .join(", ")
}
