//! University domain models and parameters.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::UniversityStatus;
use sea_orm::ActiveEnum;

use crate::{
    model::university::{
        CreateUniversityDto, UniversityDto, UniversityStatsDto, UniversitySummaryDto,
        UpdateUniversityDto,
    },
    server::{error::AppError, model::non_blank, util::enums::parse_optional_enum},
};

impl From<entity::university::Model> for UniversityDto {
    fn from(u: entity::university::Model) -> Self {
        Self {
            id: u.id,
            code: u.code,
            name: u.name,
            address: u.address,
            city: u.city,
            phone: u.phone,
            email: u.email,
            establishment_date: u.establishment_date,
            status: u.status.to_value(),
            registration_date: u.registration_date,
        }
    }
}

impl From<entity::university::Model> for UniversitySummaryDto {
    fn from(u: entity::university::Model) -> Self {
        Self {
            id: u.id,
            code: u.code,
            name: u.name,
            city: u.city,
        }
    }
}

/// Parameters for creating a university.
#[derive(Debug, Clone)]
pub struct CreateUniversityParams {
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub establishment_date: Option<NaiveDate>,
    /// Defaults to `pending` when not supplied.
    pub status: UniversityStatus,
}

impl CreateUniversityParams {
    /// Validates the request body.
    ///
    /// # Returns
    /// - `Ok(CreateUniversityParams)` - Code and name present, status literal valid
    /// - `Err(AppError::Validation)` - Missing code or name, or unknown status
    pub fn from_dto(dto: CreateUniversityDto) -> Result<Self, AppError> {
        let (Some(code), Some(name)) = (non_blank(dto.code), non_blank(dto.name)) else {
            return Err(AppError::Validation(
                "code and name are required".to_string(),
            ));
        };

        let status = parse_optional_enum::<UniversityStatus>("Status", dto.status.as_deref())?
            .unwrap_or(UniversityStatus::Pending);

        Ok(Self {
            code,
            name,
            address: dto.address,
            city: dto.city,
            phone: dto.phone,
            email: dto.email,
            establishment_date: dto.establishment_date,
            status,
        })
    }
}

/// Parameters for updating a university; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUniversityParams {
    pub code: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub establishment_date: Option<NaiveDate>,
}

impl UpdateUniversityParams {
    pub fn from_dto(dto: UpdateUniversityDto) -> Self {
        Self {
            code: non_blank(dto.code),
            name: non_blank(dto.name),
            address: dto.address,
            city: dto.city,
            phone: dto.phone,
            email: dto.email,
            establishment_date: dto.establishment_date,
        }
    }
}

/// Headcounts for one university.
#[derive(Debug, Clone, PartialEq)]
pub struct UniversityStats {
    pub university_id: i32,
    pub total_students: u64,
    pub active_students: u64,
    pub total_users: u64,
    pub total_programs: u64,
    pub total_competitions: u64,
    pub total_news: u64,
}

impl UniversityStats {
    pub fn into_dto(self) -> UniversityStatsDto {
        UniversityStatsDto {
            university_id: self.university_id,
            total_students: self.total_students,
            active_students: self.active_students,
            total_users: self.total_users,
            total_programs: self.total_programs,
            total_competitions: self.total_competitions,
            total_news: self.total_news,
        }
    }
}
