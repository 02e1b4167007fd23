use crate::server::{data::user::UserRepository, model::user::UserFilter};
use entity::sea_orm_active_enums::{UserRole, UserStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_filtered;
mod get_stats;
mod search;
