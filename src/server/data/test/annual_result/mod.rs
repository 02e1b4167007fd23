use crate::server::data::annual_result::{AnnualResultRepository, NO_HONORS, PENDING_DECISION};
use entity::sea_orm_active_enums::{BoardDecision, Honors};
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::registration::{AnnualResultFactory, RegistrationFactory},
};

mod get_by_student;
mod get_ranking;
mod get_stats;

/// Registers a new student of the university in `specialization_id` for `academic_year`.
async fn enroll(
    db: &DatabaseConnection,
    university_id: i32,
    specialization_id: i32,
    academic_year: &str,
) -> Result<entity::student_registration::Model, DbErr> {
    let (_, student) = factory::student::create_student(db, university_id).await?;

    RegistrationFactory::new(db, student.id, specialization_id)
        .academic_year(academic_year)
        .build()
        .await
}
