use crate::server::{
    data::competition::CompetitionRepository, model::competition::CompetitionFilter,
};
use entity::sea_orm_active_enums::{CompetitionStatus, CompetitionType};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_applications;
mod get_filtered;
