//! Academic record DTOs: programs, registrations, courses, grades, results and cards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ProgramSummaryDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub level: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SpecializationSummaryDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub program: Option<ProgramSummaryDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RegistrationDto {
    pub id: i32,
    pub student_id: i32,
    pub specialization_id: i32,
    pub academic_year: String,
    pub study_level: i32,
    pub registration_date: DateTime<Utc>,
    pub specialization: Option<SpecializationSummaryDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TeachingUnitSummaryDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub credits: i32,
    pub unit_type: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CourseDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub teacher_id: Option<i32>,
    pub coefficient: f64,
    pub credits: i32,
    pub total_hours: Option<i32>,
    pub teaching_unit: Option<TeachingUnitSummaryDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GradeDto {
    pub id: i32,
    pub course_id: i32,
    pub registration_id: i32,
    pub continuous_assessment: Option<f64>,
    pub exam_grade: Option<f64>,
    pub course_average: Option<f64>,
    pub validation_status: String,
    pub earned_credits: i32,
    pub session: i32,
    pub comments: Option<String>,
    pub course: Option<CourseDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SemesterResultDto {
    pub id: i32,
    pub semester_id: i32,
    pub semester_average: Option<f64>,
    pub credits_earned: i32,
    pub decision: Option<String>,
    pub ranking: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AnnualResultDto {
    pub id: i32,
    pub academic_year: String,
    pub annual_average: Option<f64>,
    pub credits_earned: i32,
    pub board_decision: Option<String>,
    pub honors: Option<String>,
    pub ranking: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StudentCardDto {
    pub id: i32,
    pub card_number: String,
    pub issue_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub status: String,
    pub request_type: String,
}

/// One academic year of a student's record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RegistrationRecordDto {
    #[serde(flatten)]
    pub registration: RegistrationDto,
    pub grades: Vec<GradeDto>,
    pub semester_results: Vec<SemesterResultDto>,
    pub annual_result: Option<AnnualResultDto>,
}
