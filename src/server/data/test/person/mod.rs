use crate::server::data::person::PersonRepository;
use entity::sea_orm_active_enums::PersonType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_with_multiple_roles;
mod get_roles;
mod national_id_taken;
mod search;
