//! User factory for creating test staff user entities.

use crate::factory::{helpers::next_id, person::create_person};
use chrono::Utc;
use entity::sea_orm_active_enums::{PersonType, UserRole, UserStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test staff users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db, person.id, university.id)
///     .role(UserRole::Teacher)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    person_id: i32,
    university_id: i32,
    employee_id: String,
    email: String,
    role: UserRole,
    status: UserStatus,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - employee_id: `"EMP{id}"`
    /// - email: `"staff{id}@univ.example.com"`
    /// - role: `AcademicAgent`
    /// - status: `Active`
    pub fn new(db: &'a DatabaseConnection, person_id: i32, university_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            person_id,
            university_id,
            employee_id: format!("EMP{}", id),
            email: format!("staff{}@univ.example.com", id),
            role: UserRole::AcademicAgent,
            status: UserStatus::Active,
        }
    }

    pub fn employee_id(mut self, employee_id: impl Into<String>) -> Self {
        self.employee_id = employee_id.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            person_id: ActiveValue::Set(self.person_id),
            university_id: ActiveValue::Set(self.university_id),
            employee_id: ActiveValue::Set(self.employee_id),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(None),
            role: ActiveValue::Set(self.role),
            status: ActiveValue::Set(self.status),
            hire_date: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a staff person and its user row in the given university.
///
/// # Returns
/// - `Ok((person, user))` - The created person and user
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user(
    db: &DatabaseConnection,
    university_id: i32,
) -> Result<(entity::person::Model, entity::user::Model), DbErr> {
    let person = create_person(db, PersonType::Staff).await?;
    let user = UserFactory::new(db, person.id, university_id)
        .build()
        .await?;

    Ok((person, user))
}

/// Creates a staff person with the teacher role in the given university.
pub async fn create_teacher(
    db: &DatabaseConnection,
    university_id: i32,
) -> Result<(entity::person::Model, entity::user::Model), DbErr> {
    let person = create_person(db, PersonType::Staff).await?;
    let user = UserFactory::new(db, person.id, university_id)
        .role(UserRole::Teacher)
        .build()
        .await?;

    Ok((person, user))
}
