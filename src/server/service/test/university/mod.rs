use crate::server::{
    error::AppError,
    model::university::{CreateUniversityParams, UpdateUniversityParams},
    service::university::UniversityService,
};
use entity::sea_orm_active_enums::UniversityStatus;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

fn university_params(code: &str) -> CreateUniversityParams {
    CreateUniversityParams {
        code: code.to_string(),
        name: format!("University {}", code),
        address: None,
        city: Some("Saint-Louis".to_string()),
        phone: None,
        email: None,
        establishment_date: None,
        status: UniversityStatus::Pending,
    }
}
