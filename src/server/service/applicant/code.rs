//! Application code generation.
//!
//! Codes have the form `APP-<year>-<sequence>` where the sequence is a 6-digit,
//! zero-padded counter that restarts at 1 every calendar year. The next sequence is
//! derived from the highest code already issued for the year, so two concurrent
//! creations can compute the same code; the unique constraint on the column rejects
//! the second insert.

use chrono::{Datelike, Utc};
use sea_orm::{ConnectionTrait, DbErr};

use crate::server::data::applicant::ApplicantRepository;

/// Generates application codes from the codes already stored.
pub struct ApplicationCodeGenerator<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationCodeGenerator<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Generates the next code for the current calendar year.
    pub async fn generate(&self) -> Result<String, DbErr> {
        self.generate_for_year(Utc::now().year()).await
    }

    /// Generates the next code for `year`.
    ///
    /// # Returns
    /// - `Ok(String)` - `APP-<year>-000001` when no code exists for the year, otherwise the
    ///   highest sequence of the year plus one
    /// - `Err(DbErr)` - Database error while reading the latest code
    pub async fn generate_for_year(&self, year: i32) -> Result<String, DbErr> {
        let prefix = code_prefix(year);

        let highest = ApplicantRepository::new(self.db)
            .find_highest_code(&prefix)
            .await?;

        Ok(next_code(year, highest.as_deref()))
    }
}

fn code_prefix(year: i32) -> String {
    format!("APP-{}-", year)
}

/// Computes the code following `latest` within `year`.
///
/// Starts over at 1 when there is no previous code or its suffix is not a number.
pub fn next_code(year: i32, latest: Option<&str>) -> String {
    let prefix = code_prefix(year);

    let sequence = latest
        .and_then(|code| code.strip_prefix(&prefix))
        .and_then(|suffix| suffix.parse::<u32>().ok())
        .map(|last| last + 1)
        .unwrap_or(1);

    format!("{}{:06}", prefix, sequence)
}
