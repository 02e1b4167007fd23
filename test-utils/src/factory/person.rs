//! Person factory for creating test person entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::PersonType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test persons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let person = PersonFactory::new(&db)
///     .person_type(PersonType::Applicant)
///     .first_name("Awa")
///     .national_id(Some("SN-001".to_string()))
///     .build()
///     .await?;
/// ```
pub struct PersonFactory<'a> {
    db: &'a DatabaseConnection,
    person_type: PersonType,
    national_id: Option<String>,
    first_name: String,
    last_name: String,
    personal_email: Option<String>,
}

impl<'a> PersonFactory<'a> {
    /// Creates a new PersonFactory with default values.
    ///
    /// Defaults:
    /// - person_type: `Student`
    /// - national_id: `Some("NID{id}")`
    /// - first_name: `"First{id}"`
    /// - last_name: `"Last{id}"`
    /// - personal_email: `Some("person{id}@example.com")`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            person_type: PersonType::Student,
            national_id: Some(format!("NID{}", id)),
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            personal_email: Some(format!("person{}@example.com", id)),
        }
    }

    pub fn person_type(mut self, person_type: PersonType) -> Self {
        self.person_type = person_type;
        self
    }

    pub fn national_id(mut self, national_id: Option<String>) -> Self {
        self.national_id = national_id;
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn personal_email(mut self, personal_email: Option<String>) -> Self {
        self.personal_email = personal_email;
        self
    }

    /// Builds and inserts the person entity into the database.
    pub async fn build(self) -> Result<entity::person::Model, DbErr> {
        entity::person::ActiveModel {
            person_type: ActiveValue::Set(self.person_type),
            national_id: ActiveValue::Set(self.national_id),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            birth_date: ActiveValue::Set(None),
            birth_place: ActiveValue::Set(None),
            nationality: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            phone: ActiveValue::Set(None),
            personal_email: ActiveValue::Set(self.personal_email),
            gender: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a person of the given type with default values.
pub async fn create_person(
    db: &DatabaseConnection,
    person_type: PersonType,
) -> Result<entity::person::Model, DbErr> {
    PersonFactory::new(db).person_type(person_type).build().await
}
