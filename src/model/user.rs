use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::model::{
    academic::CourseDto, person::PersonFieldsDto, person::PersonSummaryDto,
    university::UniversitySummaryDto,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub person_id: i32,
    pub university_id: i32,
    pub employee_id: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub status: String,
    pub hire_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub person: Option<PersonSummaryDto>,
    pub university: Option<UniversitySummaryDto>,
}

/// Staff user with the courses they teach.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDetailDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub courses: Vec<CourseDto>,
}

/// Staff role embedded in a person detail.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserSummaryDto {
    pub id: i32,
    pub employee_id: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub university: Option<UniversitySummaryDto>,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct CreateUserDto {
    #[serde(flatten)]
    pub person: PersonFieldsDto,
    pub university_id: Option<i32>,
    pub employee_id: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub hire_date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct UpdateUserDto {
    #[serde(flatten)]
    pub person: PersonFieldsDto,
    pub university_id: Option<i32>,
    pub employee_id: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub hire_date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct ReassignCoursesDto {
    pub target_user_id: Option<i32>,
}

/// Result of moving a teacher's courses to another user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ReassignCoursesResultDto {
    pub source_user_id: i32,
    pub target_user_id: i32,
    pub reassigned_courses: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserStatsDto {
    pub total_users: u64,
    pub active_users: u64,
    pub role_stats: BTreeMap<String, u64>,
    pub status_stats: BTreeMap<String, u64>,
}
