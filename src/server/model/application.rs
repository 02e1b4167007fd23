//! Application domain models and parameters.

use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::ActiveEnum;

use crate::{
    model::application::{ApplicationDto, CreateApplicationDto},
    server::{
        error::AppError, model::competition::CompetitionWithUniversity,
        util::enums::parse_optional_enum,
    },
};

/// Application with the competition it was filed for.
#[derive(Debug, Clone)]
pub struct ApplicationWithCompetition {
    pub application: entity::application::Model,
    pub competition: Option<CompetitionWithUniversity>,
}

impl ApplicationWithCompetition {
    pub fn into_dto(self) -> ApplicationDto {
        ApplicationDto {
            id: self.application.id,
            applicant_id: self.application.applicant_id,
            competition_id: self.application.competition_id,
            application_date: self.application.application_date,
            status: self.application.status.to_value(),
            file: self.application.file,
            competition: self
                .competition
                .map(CompetitionWithUniversity::into_summary_dto),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApplicationFilter {
    pub applicant_id: Option<i32>,
    pub competition_id: Option<i32>,
    pub status: Option<ApplicationStatus>,
}

impl ApplicationFilter {
    pub fn new(
        applicant_id: Option<i32>,
        competition_id: Option<i32>,
        status: Option<&str>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            applicant_id,
            competition_id,
            status: parse_optional_enum::<ApplicationStatus>("Status", status)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateApplicationParams {
    pub applicant_id: i32,
    pub competition_id: i32,
    pub file: Option<String>,
}

impl CreateApplicationParams {
    pub fn from_dto(dto: CreateApplicationDto) -> Result<Self, AppError> {
        let (Some(applicant_id), Some(competition_id)) = (dto.applicant_id, dto.competition_id)
        else {
            return Err(AppError::Validation(
                "applicant_id and competition_id are required".to_string(),
            ));
        };

        Ok(Self {
            applicant_id,
            competition_id,
            file: dto.file,
        })
    }
}
