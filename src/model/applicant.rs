use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    application::ApplicationDto,
    person::{PersonFieldsDto, PersonSummaryDto},
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApplicantDto {
    pub id: i32,
    pub person_id: i32,
    pub application_code: String,
    pub created_at: DateTime<Utc>,
    pub person: Option<PersonSummaryDto>,
    pub applications: Vec<ApplicationDto>,
}

/// Applicant role embedded in a person detail.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApplicantSummaryDto {
    pub id: i32,
    pub application_code: String,
    pub application_count: u64,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct CreateApplicantDto {
    #[serde(flatten)]
    pub person: PersonFieldsDto,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct UpdateApplicantDto {
    pub application_code: Option<String>,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct MergeApplicantsDto {
    pub source_applicant_id: Option<i32>,
    pub target_applicant_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MonthlyCountDto {
    /// Calendar month formatted as `YYYY-MM`.
    pub month: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApplicantStatsDto {
    pub total_applicants: u64,
    pub applicants_with_applications: u64,
    pub applicants_with_multiple_applications: u64,
    pub applicants_without_applications: u64,
    pub monthly_trend: Vec<MonthlyCountDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct ApplicationStatusCountsDto {
    pub total: u64,
    pub pending: u64,
    pub validated: u64,
    pub rejected: u64,
    pub selected: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApplicationHistoryDto {
    pub applicant: ApplicantDto,
    pub stats: ApplicationStatusCountsDto,
}
