use crate::server::data::academic::AcademicRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::registration::RegistrationFactory};

mod get_courses_by_teacher;
mod get_grades_by_registration;
mod get_registrations;
