use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::model::{
    academic::{GradeDto, RegistrationDto, RegistrationRecordDto, StudentCardDto},
    person::{PersonFieldsDto, PersonSummaryDto},
    university::UniversitySummaryDto,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub person_id: i32,
    pub university_id: i32,
    pub student_number: String,
    pub academic_email: Option<String>,
    pub admission_date: NaiveDate,
    pub status: String,
    pub admission_type: Option<String>,
    pub high_school_origin: Option<String>,
    pub baccalaureate_year: Option<i32>,
    pub baccalaureate_series: Option<String>,
    pub created_at: DateTime<Utc>,
    pub person: Option<PersonSummaryDto>,
    pub university: Option<UniversitySummaryDto>,
}

/// Student with cards, registrations and most recent grades.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StudentDetailDto {
    #[serde(flatten)]
    pub student: StudentDto,
    pub cards: Vec<StudentCardDto>,
    pub registrations: Vec<RegistrationDto>,
    pub recent_grades: Vec<GradeDto>,
}

/// Student listed under a university with their latest registration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UniversityStudentDto {
    #[serde(flatten)]
    pub student: StudentDto,
    pub latest_registration: Option<RegistrationDto>,
}

/// Student role embedded in a person detail.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StudentSummaryDto {
    pub id: i32,
    pub student_number: String,
    pub academic_email: Option<String>,
    pub status: String,
    pub university: Option<UniversitySummaryDto>,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct CreateStudentDto {
    #[serde(flatten)]
    pub person: PersonFieldsDto,
    pub university_id: Option<i32>,
    pub student_number: Option<String>,
    pub academic_email: Option<String>,
    pub admission_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub admission_type: Option<String>,
    pub high_school_origin: Option<String>,
    pub baccalaureate_year: Option<i32>,
    pub baccalaureate_series: Option<String>,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct UpdateStudentDto {
    #[serde(flatten)]
    pub person: PersonFieldsDto,
    pub student_number: Option<String>,
    pub academic_email: Option<String>,
    pub admission_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub admission_type: Option<String>,
    pub high_school_origin: Option<String>,
    pub baccalaureate_year: Option<i32>,
    pub baccalaureate_series: Option<String>,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct TransferStudentDto {
    pub target_university_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BacYearCountDto {
    pub year: i32,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentStatsDto {
    pub total_students: u64,
    pub active_students: u64,
    pub status_stats: BTreeMap<String, u64>,
    pub admission_stats: BTreeMap<String, u64>,
    pub recent_bac_years: Vec<BacYearCountDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AcademicHistoryDto {
    pub student: StudentDto,
    pub registrations: Vec<RegistrationRecordDto>,
}
