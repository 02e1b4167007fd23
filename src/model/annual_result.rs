use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::model::academic::RegistrationDto;

/// Student named on an annual result.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ResultStudentDto {
    pub id: i32,
    pub student_number: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AnnualResultDetailDto {
    pub id: i32,
    pub registration_id: i32,
    pub academic_year: String,
    pub annual_average: Option<f64>,
    pub credits_earned: i32,
    pub board_decision: Option<String>,
    pub honors: Option<String>,
    pub ranking: Option<i32>,
    pub registration: Option<RegistrationDto>,
    pub student: Option<ResultStudentDto>,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct CreateAnnualResultDto {
    pub registration_id: Option<i32>,
    pub annual_average: Option<f64>,
    pub credits_earned: Option<i32>,
    pub board_decision: Option<String>,
    pub honors: Option<String>,
    pub ranking: Option<i32>,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct UpdateAnnualResultDto {
    pub annual_average: Option<f64>,
    pub credits_earned: Option<i32>,
    pub board_decision: Option<String>,
    pub honors: Option<String>,
    pub ranking: Option<i32>,
}

/// Body of the calculate and generate endpoints.
#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct CalculateAnnualResultDto {
    pub registration_id: Option<i32>,
}

/// Annual result computed from a registration's grades.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CalculatedAnnualResultDto {
    pub registration_id: i32,
    pub academic_year: String,
    pub annual_average: Option<f64>,
    pub credits_earned: i32,
    pub board_decision: Option<String>,
    pub honors: Option<String>,
    pub graded_courses: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AnnualResultStatsDto {
    pub academic_year: String,
    pub total_results: u64,
    pub graded_results: u64,
    pub average: Option<f64>,
    pub highest: Option<f64>,
    pub lowest: Option<f64>,
    pub decision_stats: BTreeMap<String, u64>,
    pub honors_stats: BTreeMap<String, u64>,
    /// Percentage of results with decision `Admitted`.
    pub admission_rate: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StudentAnnualSummaryDto {
    pub student_id: i32,
    pub student_number: String,
    pub years_completed: usize,
    pub total_credits: i64,
    pub cumulative_average: Option<f64>,
    pub latest_board_decision: Option<String>,
    pub results: Vec<AnnualResultDetailDto>,
}
