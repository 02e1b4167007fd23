use crate::server::{data::student::StudentRepository, model::student::StudentFilter};
use entity::sea_orm_active_enums::{AdmissionType, StudentStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_dependents;
mod get_by_status;
mod get_by_university;
mod get_filtered;
mod get_stats;
mod search;
