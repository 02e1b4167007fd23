//! Person domain models and parameters.
//!
//! A person holds the identity shared by every role. Role creation bodies embed the
//! person attributes, so the parameter types here are reused by the student, user and
//! applicant parameters.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{Gender, PersonType};
use sea_orm::ActiveEnum;

use crate::{
    model::{
        applicant::ApplicantSummaryDto,
        person::{CreatePersonDto, PersonDetailDto, PersonDto, PersonFieldsDto, PersonSummaryDto},
        student::StudentSummaryDto,
        user::UserSummaryDto,
    },
    server::{
        error::AppError,
        model::non_blank,
        util::enums::{parse_enum, parse_optional_enum},
    },
};

impl From<entity::person::Model> for PersonDto {
    fn from(p: entity::person::Model) -> Self {
        Self {
            id: p.id,
            person_type: p.person_type.to_value(),
            national_id: p.national_id,
            first_name: p.first_name,
            last_name: p.last_name,
            birth_date: p.birth_date,
            birth_place: p.birth_place,
            nationality: p.nationality,
            address: p.address,
            phone: p.phone,
            personal_email: p.personal_email,
            gender: p.gender.map(|g| g.to_value()),
            created_at: p.created_at,
        }
    }
}

impl From<entity::person::Model> for PersonSummaryDto {
    fn from(p: entity::person::Model) -> Self {
        Self {
            id: p.id,
            first_name: p.first_name,
            last_name: p.last_name,
            national_id: p.national_id,
            personal_email: p.personal_email,
            phone: p.phone,
        }
    }
}

/// Validated attributes for inserting a person row.
#[derive(Debug, Clone)]
pub struct CreatePersonParams {
    pub person_type: PersonType,
    pub first_name: String,
    pub last_name: String,
    pub national_id: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub birth_place: Option<String>,
    pub nationality: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub personal_email: Option<String>,
    pub gender: Option<Gender>,
}

impl CreatePersonParams {
    /// Builds person parameters for a role whose only required identity is a name.
    ///
    /// # Returns
    /// - `Err(AppError::Validation)` - "first_name and last_name are required", or a
    ///   gender other than `M`/`F`
    pub fn from_fields(person_type: PersonType, fields: PersonFieldsDto) -> Result<Self, AppError> {
        let (Some(first_name), Some(last_name)) =
            (non_blank(fields.first_name.clone()), non_blank(fields.last_name.clone()))
        else {
            return Err(AppError::Validation(
                "first_name and last_name are required".to_string(),
            ));
        };

        Self::build(person_type, first_name, last_name, fields)
    }

    /// Builds person parameters for an applicant, which also requires a national ID.
    pub fn applicant_from_fields(fields: PersonFieldsDto) -> Result<Self, AppError> {
        let (Some(first_name), Some(last_name), Some(_)) = (
            non_blank(fields.first_name.clone()),
            non_blank(fields.last_name.clone()),
            non_blank(fields.national_id.clone()),
        ) else {
            return Err(AppError::Validation(
                "first_name, last_name, and national_id are required".to_string(),
            ));
        };

        Self::build(PersonType::Applicant, first_name, last_name, fields)
    }

    /// Builds person parameters from a standalone person body.
    pub fn from_dto(dto: CreatePersonDto) -> Result<Self, AppError> {
        let person_type = match dto.person_type.as_deref() {
            Some(value) => parse_enum::<PersonType>("person_type", value)?,
            None => {
                return Err(AppError::Validation(
                    "person_type is required".to_string(),
                ))
            }
        };

        Self::from_fields(person_type, dto.fields)
    }

    fn build(
        person_type: PersonType,
        first_name: String,
        last_name: String,
        fields: PersonFieldsDto,
    ) -> Result<Self, AppError> {
        let gender = parse_optional_enum::<Gender>("Gender", fields.gender.as_deref())?;

        Ok(Self {
            person_type,
            first_name,
            last_name,
            national_id: non_blank(fields.national_id),
            birth_date: fields.birth_date,
            birth_place: fields.birth_place,
            nationality: fields.nationality,
            address: fields.address,
            phone: fields.phone,
            personal_email: non_blank(fields.personal_email),
            gender,
        })
    }
}

/// Person attributes to change; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdatePersonParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub national_id: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub birth_place: Option<String>,
    pub nationality: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub personal_email: Option<String>,
    pub gender: Option<Gender>,
}

impl UpdatePersonParams {
    pub fn from_fields(fields: PersonFieldsDto) -> Result<Self, AppError> {
        Ok(Self {
            first_name: non_blank(fields.first_name),
            last_name: non_blank(fields.last_name),
            national_id: non_blank(fields.national_id),
            birth_date: fields.birth_date,
            birth_place: fields.birth_place,
            nationality: fields.nationality,
            address: fields.address,
            phone: fields.phone,
            personal_email: non_blank(fields.personal_email),
            gender: parse_optional_enum::<Gender>("Gender", fields.gender.as_deref())?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.national_id.is_none()
            && self.birth_date.is_none()
            && self.birth_place.is_none()
            && self.nationality.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.personal_email.is_none()
            && self.gender.is_none()
    }
}

/// Person together with each role row it holds.
#[derive(Debug, Clone)]
pub struct PersonWithRoles {
    pub person: entity::person::Model,
    pub user: Option<(entity::user::Model, Option<entity::university::Model>)>,
    pub student: Option<(entity::student::Model, Option<entity::university::Model>)>,
    /// Applicant row and its number of applications.
    pub applicant: Option<(entity::applicant::Model, u64)>,
}

impl PersonWithRoles {
    pub fn into_dto(self) -> PersonDetailDto {
        PersonDetailDto {
            person: self.person.into(),
            user: self.user.map(|(user, university)| UserSummaryDto {
                id: user.id,
                employee_id: user.employee_id,
                email: user.email,
                role: user.role.to_value(),
                status: user.status.to_value(),
                university: university.map(Into::into),
            }),
            student: self.student.map(|(student, university)| StudentSummaryDto {
                id: student.id,
                student_number: student.student_number,
                academic_email: student.academic_email,
                status: student.status.to_value(),
                university: university.map(Into::into),
            }),
            applicant: self
                .applicant
                .map(|(applicant, application_count)| ApplicantSummaryDto {
                    id: applicant.id,
                    application_code: applicant.application_code,
                    application_count,
                }),
        }
    }
}
