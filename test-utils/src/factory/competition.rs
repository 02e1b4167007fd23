//! Competition factory for creating test competition entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::{CompetitionStatus, CompetitionType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test competitions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let competition = CompetitionFactory::new(&db, university.id)
///     .status(CompetitionStatus::Closed)
///     .closing_date(Utc::now() - Duration::days(1))
///     .build()
///     .await?;
/// ```
pub struct CompetitionFactory<'a> {
    db: &'a DatabaseConnection,
    university_id: i32,
    name: String,
    competition_type: CompetitionType,
    opening_date: DateTime<Utc>,
    closing_date: DateTime<Utc>,
    status: CompetitionStatus,
}

impl<'a> CompetitionFactory<'a> {
    /// Creates a new CompetitionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Competition {id}"`
    /// - competition_type: `Bachelor`
    /// - opening_date: 30 days ago
    /// - closing_date: 30 days from now
    /// - status: `Open`
    pub fn new(db: &'a DatabaseConnection, university_id: i32) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            university_id,
            name: format!("Competition {}", id),
            competition_type: CompetitionType::Bachelor,
            opening_date: now - Duration::days(30),
            closing_date: now + Duration::days(30),
            status: CompetitionStatus::Open,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn competition_type(mut self, competition_type: CompetitionType) -> Self {
        self.competition_type = competition_type;
        self
    }

    pub fn closing_date(mut self, closing_date: DateTime<Utc>) -> Self {
        self.closing_date = closing_date;
        self
    }

    pub fn status(mut self, status: CompetitionStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the competition entity into the database.
    pub async fn build(self) -> Result<entity::competition::Model, DbErr> {
        entity::competition::ActiveModel {
            university_id: ActiveValue::Set(self.university_id),
            name: ActiveValue::Set(self.name),
            competition_type: ActiveValue::Set(self.competition_type),
            opening_date: ActiveValue::Set(self.opening_date),
            closing_date: ActiveValue::Set(self.closing_date),
            application_fee: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open competition for the given university.
pub async fn create_competition(
    db: &DatabaseConnection,
    university_id: i32,
) -> Result<entity::competition::Model, DbErr> {
    CompetitionFactory::new(db, university_id).build().await
}
