//! Competition domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{CompetitionStatus, CompetitionType};
use sea_orm::ActiveEnum;

use crate::{
    model::competition::{
        CompetitionDto, CompetitionSummaryDto, CreateCompetitionDto, UpdateCompetitionDto,
    },
    server::{
        error::AppError,
        model::non_blank,
        util::enums::{parse_enum, parse_optional_enum},
    },
};

/// Competition with its university.
#[derive(Debug, Clone)]
pub struct CompetitionWithUniversity {
    pub competition: entity::competition::Model,
    pub university: Option<entity::university::Model>,
}

impl CompetitionWithUniversity {
    pub fn into_dto(self) -> CompetitionDto {
        CompetitionDto {
            id: self.competition.id,
            university_id: self.competition.university_id,
            name: self.competition.name,
            competition_type: self.competition.competition_type.to_value(),
            opening_date: self.competition.opening_date,
            closing_date: self.competition.closing_date,
            application_fee: self.competition.application_fee,
            description: self.competition.description,
            status: self.competition.status.to_value(),
            university: self.university.map(Into::into),
        }
    }

    pub fn into_summary_dto(self) -> CompetitionSummaryDto {
        CompetitionSummaryDto {
            id: self.competition.id,
            name: self.competition.name,
            competition_type: self.competition.competition_type.to_value(),
            status: self.competition.status.to_value(),
            closing_date: self.competition.closing_date,
            university: self.university.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompetitionFilter {
    pub university_id: Option<i32>,
    pub status: Option<CompetitionStatus>,
    pub competition_type: Option<CompetitionType>,
}

impl CompetitionFilter {
    pub fn new(
        university_id: Option<i32>,
        status: Option<&str>,
        competition_type: Option<&str>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            university_id,
            status: parse_optional_enum::<CompetitionStatus>("Status", status)?,
            competition_type: parse_optional_enum::<CompetitionType>(
                "Competition type",
                competition_type,
            )?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateCompetitionParams {
    pub university_id: i32,
    pub name: String,
    pub competition_type: CompetitionType,
    pub opening_date: DateTime<Utc>,
    pub closing_date: DateTime<Utc>,
    pub application_fee: Option<f64>,
    pub description: Option<String>,
    pub status: CompetitionStatus,
}

impl CreateCompetitionParams {
    /// Validates a competition creation body.
    ///
    /// The closing date may not precede the opening date.
    pub fn from_dto(dto: CreateCompetitionDto) -> Result<Self, AppError> {
        let (Some(university_id), Some(name), Some(competition_type), Some(opening_date), Some(closing_date)) = (
            dto.university_id,
            non_blank(dto.name),
            non_blank(dto.competition_type),
            dto.opening_date,
            dto.closing_date,
        ) else {
            return Err(AppError::Validation(
                "university_id, name, competition_type, opening_date, and closing_date are required"
                    .to_string(),
            ));
        };

        if closing_date < opening_date {
            return Err(AppError::Validation(
                "closing_date must not be before opening_date".to_string(),
            ));
        }

        Ok(Self {
            university_id,
            name,
            competition_type: parse_enum::<CompetitionType>("Competition type", &competition_type)?,
            opening_date,
            closing_date,
            application_fee: dto.application_fee,
            description: dto.description,
            status: parse_optional_enum::<CompetitionStatus>("Status", dto.status.as_deref())?
                .unwrap_or(CompetitionStatus::Open),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCompetitionParams {
    pub name: Option<String>,
    pub competition_type: Option<CompetitionType>,
    pub opening_date: Option<DateTime<Utc>>,
    pub closing_date: Option<DateTime<Utc>>,
    pub application_fee: Option<f64>,
    pub description: Option<String>,
}

impl UpdateCompetitionParams {
    pub fn from_dto(dto: UpdateCompetitionDto) -> Result<Self, AppError> {
        Ok(Self {
            name: non_blank(dto.name),
            competition_type: parse_optional_enum::<CompetitionType>(
                "Competition type",
                dto.competition_type.as_deref(),
            )?,
            opening_date: dto.opening_date,
            closing_date: dto.closing_date,
            application_fee: dto.application_fee,
            description: dto.description,
        })
    }
}
