use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    applicant::ApplicantSummaryDto, student::StudentSummaryDto, user::UserSummaryDto,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub person_type: String,
    pub national_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub birth_place: Option<String>,
    pub nationality: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub personal_email: Option<String>,
    pub gender: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Identity fields embedded in role resources (students, applicants, staff).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PersonSummaryDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub national_id: Option<String>,
    pub personal_email: Option<String>,
    pub phone: Option<String>,
}

/// Person attributes accepted by every create/update body that touches a person.
///
/// Flattened into the role request bodies, so a student or applicant payload carries
/// these keys at the top level.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct PersonFieldsDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub national_id: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub birth_place: Option<String>,
    pub nationality: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub personal_email: Option<String>,
    pub gender: Option<String>,
}

#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct CreatePersonDto {
    pub person_type: Option<String>,
    #[serde(flatten)]
    pub fields: PersonFieldsDto,
}

/// Person with whichever roles it holds.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PersonDetailDto {
    #[serde(flatten)]
    pub person: PersonDto,
    pub user: Option<UserSummaryDto>,
    pub student: Option<StudentSummaryDto>,
    pub applicant: Option<ApplicantSummaryDto>,
}
