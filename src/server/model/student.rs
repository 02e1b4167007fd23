//! Student domain models and parameters.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{AdmissionType, PersonType, StudentStatus};
use sea_orm::ActiveEnum;
use std::collections::BTreeMap;

use crate::{
    model::student::{
        AcademicHistoryDto, BacYearCountDto, CreateStudentDto, StudentDetailDto, StudentDto,
        StudentStatsDto, UniversityStudentDto, UpdateStudentDto,
    },
    server::{
        error::AppError,
        model::{
            academic::{GradeWithCourse, RegistrationRecord, RegistrationWithSpecialization},
            non_blank,
            person::{CreatePersonParams, UpdatePersonParams},
        },
        util::enums::parse_optional_enum,
    },
};

/// Student with its person and university.
#[derive(Debug, Clone)]
pub struct StudentWithRelations {
    pub student: entity::student::Model,
    pub person: Option<entity::person::Model>,
    pub university: Option<entity::university::Model>,
}

impl StudentWithRelations {
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.student.id,
            person_id: self.student.person_id,
            university_id: self.student.university_id,
            student_number: self.student.student_number,
            academic_email: self.student.academic_email,
            admission_date: self.student.admission_date,
            status: self.student.status.to_value(),
            admission_type: self.student.admission_type.map(|t| t.to_value()),
            high_school_origin: self.student.high_school_origin,
            baccalaureate_year: self.student.baccalaureate_year,
            baccalaureate_series: self.student.baccalaureate_series,
            created_at: self.student.created_at,
            person: self.person.map(Into::into),
            university: self.university.map(Into::into),
        }
    }
}

/// Student with cards, registrations and most recent grades.
#[derive(Debug, Clone)]
pub struct StudentDetail {
    pub student: StudentWithRelations,
    pub cards: Vec<entity::student_card::Model>,
    pub registrations: Vec<RegistrationWithSpecialization>,
    pub recent_grades: Vec<GradeWithCourse>,
}

impl StudentDetail {
    pub fn into_dto(self) -> StudentDetailDto {
        StudentDetailDto {
            student: self.student.into_dto(),
            cards: self.cards.into_iter().map(Into::into).collect(),
            registrations: self
                .registrations
                .into_iter()
                .map(RegistrationWithSpecialization::into_dto)
                .collect(),
            recent_grades: self
                .recent_grades
                .into_iter()
                .map(GradeWithCourse::into_dto)
                .collect(),
        }
    }
}

/// Student listed under a university with their latest registration.
#[derive(Debug, Clone)]
pub struct UniversityStudent {
    pub student: StudentWithRelations,
    pub latest_registration: Option<RegistrationWithSpecialization>,
}

impl UniversityStudent {
    pub fn into_dto(self) -> UniversityStudentDto {
        UniversityStudentDto {
            student: self.student.into_dto(),
            latest_registration: self
                .latest_registration
                .map(RegistrationWithSpecialization::into_dto),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AcademicHistory {
    pub student: StudentWithRelations,
    pub registrations: Vec<RegistrationRecord>,
}

impl AcademicHistory {
    pub fn into_dto(self) -> AcademicHistoryDto {
        AcademicHistoryDto {
            student: self.student.into_dto(),
            registrations: self
                .registrations
                .into_iter()
                .map(RegistrationRecord::into_dto)
                .collect(),
        }
    }
}

/// Equality filters for the student listing.
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub university_id: Option<i32>,
    pub status: Option<StudentStatus>,
    pub admission_type: Option<AdmissionType>,
}

impl StudentFilter {
    pub fn new(
        university_id: Option<i32>,
        status: Option<&str>,
        admission_type: Option<&str>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            university_id,
            status: parse_optional_enum::<StudentStatus>("Status", status)?,
            admission_type: parse_optional_enum::<AdmissionType>("Admission type", admission_type)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub person: CreatePersonParams,
    pub university_id: i32,
    pub student_number: String,
    pub academic_email: Option<String>,
    pub admission_date: NaiveDate,
    pub status: StudentStatus,
    pub admission_type: Option<AdmissionType>,
    pub high_school_origin: Option<String>,
    pub baccalaureate_year: Option<i32>,
    pub baccalaureate_series: Option<String>,
}

impl CreateStudentParams {
    /// Validates a student creation body.
    ///
    /// # Returns
    /// - `Err(AppError::Validation)` - Missing name, university, student number or
    ///   admission date, or an unknown status/admission type literal
    pub fn from_dto(dto: CreateStudentDto) -> Result<Self, AppError> {
        let person = CreatePersonParams::from_fields(PersonType::Student, dto.person)?;

        let (Some(university_id), Some(student_number), Some(admission_date)) = (
            dto.university_id,
            non_blank(dto.student_number),
            dto.admission_date,
        ) else {
            return Err(AppError::Validation(
                "university_id, student_number, and admission_date are required".to_string(),
            ));
        };

        Ok(Self {
            person,
            university_id,
            student_number,
            academic_email: non_blank(dto.academic_email),
            admission_date,
            status: parse_optional_enum::<StudentStatus>("Status", dto.status.as_deref())?
                .unwrap_or(StudentStatus::Active),
            admission_type: parse_optional_enum::<AdmissionType>(
                "Admission type",
                dto.admission_type.as_deref(),
            )?,
            high_school_origin: dto.high_school_origin,
            baccalaureate_year: dto.baccalaureate_year,
            baccalaureate_series: dto.baccalaureate_series,
        })
    }
}

/// Student attributes to change; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateStudentParams {
    pub person: UpdatePersonParams,
    pub student_number: Option<String>,
    pub academic_email: Option<String>,
    pub admission_date: Option<NaiveDate>,
    pub status: Option<StudentStatus>,
    pub admission_type: Option<AdmissionType>,
    pub high_school_origin: Option<String>,
    pub baccalaureate_year: Option<i32>,
    pub baccalaureate_series: Option<String>,
}

impl UpdateStudentParams {
    pub fn from_dto(dto: UpdateStudentDto) -> Result<Self, AppError> {
        Ok(Self {
            person: UpdatePersonParams::from_fields(dto.person)?,
            student_number: non_blank(dto.student_number),
            academic_email: non_blank(dto.academic_email),
            admission_date: dto.admission_date,
            status: parse_optional_enum::<StudentStatus>("Status", dto.status.as_deref())?,
            admission_type: parse_optional_enum::<AdmissionType>(
                "Admission type",
                dto.admission_type.as_deref(),
            )?,
            high_school_origin: dto.high_school_origin,
            baccalaureate_year: dto.baccalaureate_year,
            baccalaureate_series: dto.baccalaureate_series,
        })
    }
}

/// Student counts, optionally scoped to one university.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentStats {
    pub total_students: u64,
    pub active_students: u64,
    pub status_stats: BTreeMap<String, u64>,
    pub admission_stats: BTreeMap<String, u64>,
    /// Most recent baccalaureate years first.
    pub recent_bac_years: Vec<(i32, u64)>,
}

impl StudentStats {
    pub fn into_dto(self) -> StudentStatsDto {
        StudentStatsDto {
            total_students: self.total_students,
            active_students: self.active_students,
            status_stats: self.status_stats,
            admission_stats: self.admission_stats,
            recent_bac_years: self
                .recent_bac_years
                .into_iter()
                .map(|(year, count)| BacYearCountDto { year, count })
                .collect(),
        }
    }
}
