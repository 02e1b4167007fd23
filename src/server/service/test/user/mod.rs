use super::person_params;
use crate::server::{
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams},
    service::user::UserService,
};
use entity::sea_orm_active_enums::{PersonType, UserRole, UserStatus};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod reassign_courses;
mod search;

fn user_params(university_id: i32, employee_id: &str, email: &str) -> CreateUserParams {
    CreateUserParams {
        person: person_params(PersonType::Staff, "Mamadou", "Kane"),
        university_id,
        employee_id: employee_id.to_string(),
        email: email.to_string(),
        phone: None,
        role: UserRole::Teacher,
        status: UserStatus::Active,
        hire_date: None,
    }
}
