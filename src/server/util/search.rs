use crate::server::error::AppError;

/// Minimum number of characters in a search term.
pub const SEARCH_MIN_LENGTH: usize = 2;

/// Maximum number of rows returned by any search endpoint.
pub const SEARCH_RESULT_LIMIT: u64 = 50;

/// Validates a search term before any database access.
///
/// Returns the trimmed term.
pub fn validate_search_term(term: &str) -> Result<String, AppError> {
    let term = term.trim();

    if term.chars().count() < SEARCH_MIN_LENGTH {
        return Err(AppError::Validation(format!(
            "Search term must be at least {} characters long",
            SEARCH_MIN_LENGTH
        )));
    }

    Ok(term.to_string())
}
