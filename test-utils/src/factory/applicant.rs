//! Applicant factory for creating test applicant entities.

use crate::factory::{helpers::next_id, person::create_person};
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::PersonType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test applicants with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let applicant = ApplicantFactory::new(&db, person.id)
///     .application_code("APP-2026-000007")
///     .build()
///     .await?;
/// ```
pub struct ApplicantFactory<'a> {
    db: &'a DatabaseConnection,
    person_id: i32,
    application_code: String,
    created_at: DateTime<Utc>,
}

impl<'a> ApplicantFactory<'a> {
    /// Creates a new ApplicantFactory with default values.
    ///
    /// Defaults:
    /// - application_code: `"TEST-{id}"` (outside the generated `APP-` namespace)
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, person_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            person_id,
            application_code: format!("TEST-{}", id),
            created_at: Utc::now(),
        }
    }

    pub fn application_code(mut self, application_code: impl Into<String>) -> Self {
        self.application_code = application_code.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the applicant entity into the database.
    pub async fn build(self) -> Result<entity::applicant::Model, DbErr> {
        entity::applicant::ActiveModel {
            person_id: ActiveValue::Set(self.person_id),
            application_code: ActiveValue::Set(self.application_code),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an applicant person and its applicant row.
///
/// # Returns
/// - `Ok((person, applicant))` - The created person and applicant
/// - `Err(DbErr)` - Database error during creation
pub async fn create_applicant(
    db: &DatabaseConnection,
) -> Result<(entity::person::Model, entity::applicant::Model), DbErr> {
    let person = create_person(db, PersonType::Applicant).await?;
    let applicant = ApplicantFactory::new(db, person.id).build().await?;

    Ok((person, applicant))
}
