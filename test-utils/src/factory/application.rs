//! Application factory for creating test application entities.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test applications with customizable fields.
pub struct ApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    applicant_id: i32,
    competition_id: i32,
    application_date: DateTime<Utc>,
    status: ApplicationStatus,
}

impl<'a> ApplicationFactory<'a> {
    /// Creates a new ApplicationFactory with a `Pending` status dated now.
    pub fn new(db: &'a DatabaseConnection, applicant_id: i32, competition_id: i32) -> Self {
        Self {
            db,
            applicant_id,
            competition_id,
            application_date: Utc::now(),
            status: ApplicationStatus::Pending,
        }
    }

    pub fn application_date(mut self, application_date: DateTime<Utc>) -> Self {
        self.application_date = application_date;
        self
    }

    pub fn status(mut self, status: ApplicationStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the application entity into the database.
    pub async fn build(self) -> Result<entity::application::Model, DbErr> {
        entity::application::ActiveModel {
            applicant_id: ActiveValue::Set(self.applicant_id),
            competition_id: ActiveValue::Set(self.competition_id),
            application_date: ActiveValue::Set(self.application_date),
            status: ActiveValue::Set(self.status),
            file: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending application for the applicant to the competition.
pub async fn create_application(
    db: &DatabaseConnection,
    applicant_id: i32,
    competition_id: i32,
) -> Result<entity::application::Model, DbErr> {
    ApplicationFactory::new(db, applicant_id, competition_id)
        .build()
        .await
}
