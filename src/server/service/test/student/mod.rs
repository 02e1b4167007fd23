use super::person_params;
use crate::server::{
    error::AppError,
    model::student::{CreateStudentParams, StudentFilter},
    service::student::StudentService,
};
use chrono::Utc;
use entity::sea_orm_active_enums::{PersonType, StudentStatus};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_filtered;
mod transfer;
mod update_status;

fn student_params(university_id: i32, student_number: &str) -> CreateStudentParams {
    CreateStudentParams {
        person: person_params(PersonType::Student, "Ibrahima", "Faye"),
        university_id,
        student_number: student_number.to_string(),
        academic_email: None,
        admission_date: Utc::now().date_naive(),
        status: StudentStatus::Active,
        admission_type: None,
        high_school_origin: None,
        baccalaureate_year: Some(2024),
        baccalaureate_series: Some("S2".to_string()),
    }
}
