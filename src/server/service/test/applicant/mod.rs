use super::person_params;
use crate::server::{
    error::AppError,
    model::applicant::{CreateApplicantParams, MergeApplicantsParams},
    service::applicant::{code::ApplicationCodeGenerator, ApplicantService},
};
use chrono::{Datelike, Duration, Utc};
use entity::sea_orm_active_enums::PersonType;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod merge;
