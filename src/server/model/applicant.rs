//! Applicant domain models and parameters.
//!
//! Applicants are persons applying to competitions. Each applicant carries a unique
//! application code generated per calendar year.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ApplicationStatus;

use crate::{
    model::{
        api::PeriodDto,
        applicant::{
            ApplicantDto, ApplicantStatsDto, ApplicationHistoryDto, ApplicationStatusCountsDto,
            CreateApplicantDto, MergeApplicantsDto, MonthlyCountDto,
        },
    },
    server::{
        error::AppError,
        model::{application::ApplicationWithCompetition, person::CreatePersonParams},
        util::date::{parse_end_bound, parse_start_bound},
    },
};

/// Applicant with person and applications.
#[derive(Debug, Clone)]
pub struct ApplicantWithRelations {
    pub applicant: entity::applicant::Model,
    pub person: Option<entity::person::Model>,
    pub applications: Vec<ApplicationWithCompetition>,
}

impl ApplicantWithRelations {
    pub fn into_dto(self) -> ApplicantDto {
        ApplicantDto {
            id: self.applicant.id,
            person_id: self.applicant.person_id,
            application_code: self.applicant.application_code,
            created_at: self.applicant.created_at,
            person: self.person.map(Into::into),
            applications: self
                .applications
                .into_iter()
                .map(ApplicationWithCompetition::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateApplicantParams {
    pub person: CreatePersonParams,
}

impl CreateApplicantParams {
    pub fn from_dto(dto: CreateApplicantDto) -> Result<Self, AppError> {
        Ok(Self {
            person: CreatePersonParams::applicant_from_fields(dto.person)?,
        })
    }
}

/// Source and target of an applicant merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeApplicantsParams {
    pub source_applicant_id: i32,
    pub target_applicant_id: i32,
}

impl MergeApplicantsParams {
    /// Validates the merge request before any data is touched.
    ///
    /// # Returns
    /// - `Err(AppError::Validation)` - Either ID missing, or both IDs equal
    pub fn from_dto(dto: MergeApplicantsDto) -> Result<Self, AppError> {
        let (Some(source_applicant_id), Some(target_applicant_id)) =
            (dto.source_applicant_id, dto.target_applicant_id)
        else {
            return Err(AppError::Validation(
                "source_applicant_id and target_applicant_id are required".to_string(),
            ));
        };

        if source_applicant_id == target_applicant_id {
            return Err(AppError::Validation(
                "Source and target applicants cannot be the same".to_string(),
            ));
        }

        Ok(Self {
            source_applicant_id,
            target_applicant_id,
        })
    }
}

/// Inclusive creation date window.
#[derive(Debug, Clone)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Bounds as supplied by the client, echoed back in the response.
    pub period: PeriodDto,
}

impl DateWindow {
    pub fn parse(start_date: Option<String>, end_date: Option<String>) -> Result<Self, AppError> {
        let (Some(start_date), Some(end_date)) = (start_date, end_date) else {
            return Err(AppError::Validation(
                "start_date and end_date are required".to_string(),
            ));
        };

        Ok(Self {
            start: parse_start_bound(&start_date)?,
            end: parse_end_bound(&end_date)?,
            period: PeriodDto {
                start_date,
                end_date,
            },
        })
    }
}

/// Applicant counts and monthly creation trend.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicantStats {
    pub total_applicants: u64,
    pub applicants_with_applications: u64,
    pub applicants_with_multiple_applications: u64,
    pub applicants_without_applications: u64,
    /// `(YYYY-MM, count)`, most recent month first.
    pub monthly_trend: Vec<(String, u64)>,
}

impl ApplicantStats {
    pub fn into_dto(self) -> ApplicantStatsDto {
        ApplicantStatsDto {
            total_applicants: self.total_applicants,
            applicants_with_applications: self.applicants_with_applications,
            applicants_with_multiple_applications: self.applicants_with_multiple_applications,
            applicants_without_applications: self.applicants_without_applications,
            monthly_trend: self
                .monthly_trend
                .into_iter()
                .map(|(month, count)| MonthlyCountDto { month, count })
                .collect(),
        }
    }
}

/// Applicant with per-status counts of their applications.
#[derive(Debug, Clone)]
pub struct ApplicationHistory {
    pub applicant: ApplicantWithRelations,
    pub counts: ApplicationStatusCountsDto,
}

impl ApplicationHistory {
    pub fn new(applicant: ApplicantWithRelations) -> Self {
        let mut counts = ApplicationStatusCountsDto::default();

        for application in &applicant.applications {
            counts.total += 1;
            match application.application.status {
                ApplicationStatus::Pending => counts.pending += 1,
                ApplicationStatus::Validated => counts.validated += 1,
                ApplicationStatus::Rejected => counts.rejected += 1,
                ApplicationStatus::Selected => counts.selected += 1,
            }
        }

        Self { applicant, counts }
    }

    pub fn into_dto(self) -> ApplicationHistoryDto {
        ApplicationHistoryDto {
            applicant: self.applicant.into_dto(),
            stats: self.counts,
        }
    }
}
