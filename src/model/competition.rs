use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::university::UniversitySummaryDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CompetitionDto {
    pub id: i32,
    pub university_id: i32,
    pub name: String,
    pub competition_type: String,
    pub opening_date: DateTime<Utc>,
    pub closing_date: DateTime<Utc>,
    pub application_fee: Option<f64>,
    pub description: Option<String>,
    pub status: String,
    pub university: Option<UniversitySummaryDto>,
}

/// Competition reference embedded in applications.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CompetitionSummaryDto {
    pub id: i32,
    pub name: String,
    pub competition_type: String,
    pub status: String,
    pub closing_date: DateTime<Utc>,
    pub university: Option<UniversitySummaryDto>,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct CreateCompetitionDto {
    pub university_id: Option<i32>,
    pub name: Option<String>,
    pub competition_type: Option<String>,
    pub opening_date: Option<DateTime<Utc>>,
    pub closing_date: Option<DateTime<Utc>>,
    pub application_fee: Option<f64>,
    pub description: Option<String>,
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct UpdateCompetitionDto {
    pub name: Option<String>,
    pub competition_type: Option<String>,
    pub opening_date: Option<DateTime<Utc>>,
    pub closing_date: Option<DateTime<Utc>>,
    pub application_fee: Option<f64>,
    pub description: Option<String>,
}
