//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a university and a student enrolled in it.
///
/// # Returns
/// - `Ok((university, person, student))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::university::Model,
        entity::person::Model,
        entity::student::Model,
    ),
    DbErr,
> {
    let university = crate::factory::university::create_university(db).await?;
    let (person, student) = crate::factory::student::create_student(db, university.id).await?;

    Ok((university, person, student))
}

/// Creates an applicant with one pending application to an open competition.
///
/// # Returns
/// - `Ok((person, applicant, competition, application))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_applicant_with_application(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::person::Model,
        entity::applicant::Model,
        entity::competition::Model,
        entity::application::Model,
    ),
    DbErr,
> {
    let university = crate::factory::university::create_university(db).await?;
    let competition = crate::factory::competition::create_competition(db, university.id).await?;
    let (person, applicant) = crate::factory::applicant::create_applicant(db).await?;
    let application =
        crate::factory::application::create_application(db, applicant.id, competition.id).await?;

    Ok((person, applicant, competition, application))
}

/// Creates the full academic chain down to a course.
///
/// Creates program, specialization, semester, teaching unit and course for the given
/// university. The course has no assigned teacher.
///
/// # Returns
/// - `Ok((specialization, teaching_unit, course))` - The entities tests usually reference
/// - `Err(DbErr)` - Database error during creation
pub async fn create_course_with_dependencies(
    db: &DatabaseConnection,
    university_id: i32,
) -> Result<
    (
        entity::specialization::Model,
        entity::teaching_unit::Model,
        entity::course::Model,
    ),
    DbErr,
> {
    use crate::factory::academic;

    let program = academic::create_program(db, university_id).await?;
    let specialization = academic::create_specialization(db, program.id).await?;
    let semester = academic::create_semester(db, specialization.id).await?;
    let teaching_unit = academic::create_teaching_unit(db, semester.id).await?;
    let course = academic::CourseFactory::new(db, teaching_unit.id)
        .build()
        .await?;

    Ok((specialization, teaching_unit, course))
}
