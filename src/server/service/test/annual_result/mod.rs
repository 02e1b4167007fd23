use crate::server::{
    data::annual_result::AnnualResultRepository,
    error::AppError,
    model::annual_result::CreateAnnualResultParams,
    service::annual_result::AnnualResultService,
};
use entity::sea_orm_active_enums::{BoardDecision, Honors};
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::registration::{AnnualResultFactory, RegistrationFactory},
};

mod generate;
mod update_ranking;

/// Registers a new student of the university in `specialization_id` for 2024-2025.
async fn enroll(
    db: &DatabaseConnection,
    university_id: i32,
    specialization_id: i32,
) -> Result<entity::student_registration::Model, DbErr> {
    let (_, student) = factory::student::create_student(db, university_id).await?;

    RegistrationFactory::new(db, student.id, specialization_id)
        .academic_year("2024-2025")
        .build()
        .await
}

fn result_params(registration_id: i32) -> CreateAnnualResultParams {
    CreateAnnualResultParams {
        registration_id,
        annual_average: Some(13.0),
        credits_earned: 60,
        board_decision: Some(BoardDecision::Admitted),
        honors: Some(Honors::FairlyGood),
        ranking: None,
    }
}
