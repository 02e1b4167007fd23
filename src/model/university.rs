use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UniversityDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub establishment_date: Option<NaiveDate>,
    pub status: String,
    pub registration_date: DateTime<Utc>,
}

/// Compact university reference embedded in other resources.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UniversitySummaryDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub city: Option<String>,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct CreateUniversityDto {
    pub code: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub establishment_date: Option<NaiveDate>,
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct UpdateUniversityDto {
    pub code: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub establishment_date: Option<NaiveDate>,
}

/// Per-university headcounts.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UniversityStatsDto {
    pub university_id: i32,
    pub total_students: u64,
    pub active_students: u64,
    pub total_users: u64,
    pub total_programs: u64,
    pub total_competitions: u64,
    pub total_news: u64,
}
