use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

use crate::server::error::AppError;

/// Academic year containing today, formatted `YYYY-YYYY+1`.
pub fn current_academic_year() -> String {
    academic_year_of(Utc::now().year())
}

pub fn academic_year_of(year: i32) -> String {
    format!("{}-{}", year, year + 1)
}

/// Validates an academic year label such as `2024-2025`.
pub fn parse_academic_year(value: &str) -> Result<String, AppError> {
    let value = value.trim();

    let consecutive = value
        .split_once('-')
        .filter(|(start, end)| start.len() == 4 && end.len() == 4)
        .and_then(|(start, end)| Some((start.parse::<i32>().ok()?, end.parse::<i32>().ok()?)))
        .is_some_and(|(start, end)| end == start + 1);

    if !consecutive {
        return Err(AppError::Validation(format!(
            "Invalid academic year: {} (expected YYYY-YYYY)",
            value
        )));
    }

    Ok(value.to_string())
}

/// Parses the start of a date window.
///
/// Accepts `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp.
pub fn parse_start_bound(value: &str) -> Result<DateTime<Utc>, AppError> {
    parse_bound(value, NaiveTime::MIN)
}

/// Parses the end of a date window.
///
/// A plain date covers the whole day, so it resolves to the last instant of that day.
pub fn parse_end_bound(value: &str) -> Result<DateTime<Utc>, AppError> {
    let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    parse_bound(value, end_of_day)
}

fn parse_bound(value: &str, time: NaiveTime) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(time).and_utc());
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::Validation(format!("Invalid date: {}", value)))
}
