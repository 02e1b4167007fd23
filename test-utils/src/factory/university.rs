//! University factory for creating test university entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::UniversityStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test universities with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let university = UniversityFactory::new(&db)
///     .code("UNI-A")
///     .status(UniversityStatus::Active)
///     .build()
///     .await?;
/// ```
pub struct UniversityFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    name: String,
    city: Option<String>,
    status: UniversityStatus,
}

impl<'a> UniversityFactory<'a> {
    /// Creates a new UniversityFactory with default values.
    ///
    /// Defaults:
    /// - code: `"UNI{id}"`
    /// - name: `"University {id}"`
    /// - city: `Some("Dakar")`
    /// - status: `Active`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("UNI{}", id),
            name: format!("University {}", id),
            city: Some("Dakar".to_string()),
            status: UniversityStatus::Active,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn city(mut self, city: Option<String>) -> Self {
        self.city = city;
        self
    }

    pub fn status(mut self, status: UniversityStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the university entity into the database.
    pub async fn build(self) -> Result<entity::university::Model, DbErr> {
        entity::university::ActiveModel {
            code: ActiveValue::Set(self.code),
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(None),
            city: ActiveValue::Set(self.city),
            phone: ActiveValue::Set(None),
            email: ActiveValue::Set(None),
            establishment_date: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            registration_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a university with default values.
pub async fn create_university(
    db: &DatabaseConnection,
) -> Result<entity::university::Model, DbErr> {
    UniversityFactory::new(db).build().await
}
