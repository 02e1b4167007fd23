//! Student factory for creating test student entities.

use crate::factory::{helpers::next_id, person::create_person};
use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{AdmissionType, PersonType, StudentStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// The person and university must already exist.
///
/// # Example
///
/// ```rust,ignore
/// let student = StudentFactory::new(&db, person.id, university.id)
///     .status(StudentStatus::Suspended)
///     .baccalaureate_year(Some(2021))
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    person_id: i32,
    university_id: i32,
    student_number: String,
    academic_email: Option<String>,
    admission_date: NaiveDate,
    status: StudentStatus,
    admission_type: Option<AdmissionType>,
    baccalaureate_year: Option<i32>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - student_number: `"STU{id}"`
    /// - academic_email: `Some("student{id}@univ.example.com")`
    /// - admission_date: today
    /// - status: `Active`
    /// - admission_type: `Some(Regular)`
    /// - baccalaureate_year: `None`
    pub fn new(db: &'a DatabaseConnection, person_id: i32, university_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            person_id,
            university_id,
            student_number: format!("STU{}", id),
            academic_email: Some(format!("student{}@univ.example.com", id)),
            admission_date: Utc::now().date_naive(),
            status: StudentStatus::Active,
            admission_type: Some(AdmissionType::Regular),
            baccalaureate_year: None,
        }
    }

    pub fn student_number(mut self, student_number: impl Into<String>) -> Self {
        self.student_number = student_number.into();
        self
    }

    pub fn academic_email(mut self, academic_email: Option<String>) -> Self {
        self.academic_email = academic_email;
        self
    }

    pub fn admission_date(mut self, admission_date: NaiveDate) -> Self {
        self.admission_date = admission_date;
        self
    }

    pub fn status(mut self, status: StudentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn admission_type(mut self, admission_type: Option<AdmissionType>) -> Self {
        self.admission_type = admission_type;
        self
    }

    pub fn baccalaureate_year(mut self, baccalaureate_year: Option<i32>) -> Self {
        self.baccalaureate_year = baccalaureate_year;
        self
    }

    /// Builds and inserts the student entity into the database.
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            person_id: ActiveValue::Set(self.person_id),
            university_id: ActiveValue::Set(self.university_id),
            student_number: ActiveValue::Set(self.student_number),
            academic_email: ActiveValue::Set(self.academic_email),
            admission_date: ActiveValue::Set(self.admission_date),
            status: ActiveValue::Set(self.status),
            admission_type: ActiveValue::Set(self.admission_type),
            high_school_origin: ActiveValue::Set(None),
            baccalaureate_year: ActiveValue::Set(self.baccalaureate_year),
            baccalaureate_series: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student person and its student row in the given university.
///
/// # Returns
/// - `Ok((person, student))` - The created person and student
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student(
    db: &DatabaseConnection,
    university_id: i32,
) -> Result<(entity::person::Model, entity::student::Model), DbErr> {
    let person = create_person(db, PersonType::Student).await?;
    let student = StudentFactory::new(db, person.id, university_id)
        .build()
        .await?;

    Ok((person, student))
}
