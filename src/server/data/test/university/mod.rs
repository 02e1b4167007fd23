use crate::server::{
    data::university::UniversityRepository,
    model::university::{CreateUniversityParams, UpdateUniversityParams},
};
use entity::sea_orm_active_enums::UniversityStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod code_taken;
mod get_stats;
mod update;
