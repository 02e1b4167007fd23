use crate::server::{
    error::AppError,
    model::competition::{CreateCompetitionParams, UpdateCompetitionParams},
    service::competition::CompetitionService,
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{CompetitionStatus, CompetitionType};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
