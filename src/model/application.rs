use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::competition::CompetitionSummaryDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApplicationDto {
    pub id: i32,
    pub applicant_id: i32,
    pub competition_id: i32,
    pub application_date: DateTime<Utc>,
    pub status: String,
    pub file: Option<String>,
    pub competition: Option<CompetitionSummaryDto>,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct CreateApplicationDto {
    pub applicant_id: Option<i32>,
    pub competition_id: Option<i32>,
    pub file: Option<String>,
}
