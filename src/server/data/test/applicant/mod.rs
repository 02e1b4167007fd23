use crate::server::data::applicant::ApplicantRepository;
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod get_created_between;
mod get_stats;
mod get_with_active_applications;
mod search;
