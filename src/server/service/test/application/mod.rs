use crate::server::{
    error::AppError, model::application::CreateApplicationParams,
    service::application::ApplicationService,
};
use entity::sea_orm_active_enums::ApplicationStatus;
use test_utils::{builder::TestBuilder, factory};

mod create;
