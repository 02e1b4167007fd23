//! Annual result domain models and parameters.

use entity::sea_orm_active_enums::{BoardDecision, Honors};
use sea_orm::ActiveEnum;
use std::collections::BTreeMap;

use crate::{
    model::annual_result::{
        AnnualResultDetailDto, AnnualResultStatsDto, CalculatedAnnualResultDto,
        CreateAnnualResultDto, ResultStudentDto, StudentAnnualSummaryDto, UpdateAnnualResultDto,
    },
    server::{
        error::AppError,
        model::academic::RegistrationWithSpecialization,
        util::{date::parse_academic_year, enums::parse_optional_enum},
    },
};

/// Highest annual average on the grading scale.
pub const MAX_AVERAGE: f64 = 20.0;

/// Annual result with its registration and student.
#[derive(Debug, Clone)]
pub struct AnnualResultRecord {
    pub result: entity::annual_result::Model,
    pub registration: Option<RegistrationWithSpecialization>,
    pub student: Option<entity::student::Model>,
    pub person: Option<entity::person::Model>,
}

impl AnnualResultRecord {
    pub fn into_dto(self) -> AnnualResultDetailDto {
        let person = self.person;
        let student = self.student.map(|s| ResultStudentDto {
            id: s.id,
            student_number: s.student_number,
            first_name: person.as_ref().map(|p| p.first_name.clone()),
            last_name: person.as_ref().map(|p| p.last_name.clone()),
        });

        AnnualResultDetailDto {
            id: self.result.id,
            registration_id: self.result.registration_id,
            academic_year: self.result.academic_year,
            annual_average: self.result.annual_average,
            credits_earned: self.result.credits_earned,
            board_decision: self.result.board_decision.map(|d| d.to_value()),
            honors: self.result.honors.map(|h| h.to_value()),
            ranking: self.result.ranking,
            registration: self
                .registration
                .map(RegistrationWithSpecialization::into_dto),
            student,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnnualResultFilter {
    pub academic_year: Option<String>,
    pub board_decision: Option<BoardDecision>,
}

impl AnnualResultFilter {
    pub fn new(academic_year: Option<&str>, board_decision: Option<&str>) -> Result<Self, AppError> {
        Ok(Self {
            academic_year: academic_year.map(parse_academic_year).transpose()?,
            board_decision: parse_optional_enum::<BoardDecision>("Board decision", board_decision)?,
        })
    }
}

fn check_average(average: Option<f64>) -> Result<Option<f64>, AppError> {
    match average {
        Some(a) if !(0.0..=MAX_AVERAGE).contains(&a) => Err(AppError::Validation(format!(
            "annual_average must be between 0 and {}",
            MAX_AVERAGE
        ))),
        _ => Ok(average),
    }
}

fn check_credits(credits: Option<i32>) -> Result<Option<i32>, AppError> {
    match credits {
        Some(c) if c < 0 => Err(AppError::Validation(
            "credits_earned must not be negative".to_string(),
        )),
        _ => Ok(credits),
    }
}

fn check_ranking(ranking: Option<i32>) -> Result<Option<i32>, AppError> {
    match ranking {
        Some(r) if r < 1 => Err(AppError::Validation(
            "ranking must be at least 1".to_string(),
        )),
        _ => Ok(ranking),
    }
}

#[derive(Debug, Clone)]
pub struct CreateAnnualResultParams {
    pub registration_id: i32,
    pub annual_average: Option<f64>,
    pub credits_earned: i32,
    pub board_decision: Option<BoardDecision>,
    pub honors: Option<Honors>,
    pub ranking: Option<i32>,
}

impl CreateAnnualResultParams {
    pub fn from_dto(dto: CreateAnnualResultDto) -> Result<Self, AppError> {
        let Some(registration_id) = dto.registration_id else {
            return Err(AppError::Validation("registration_id is required".to_string()));
        };

        Ok(Self {
            registration_id,
            annual_average: check_average(dto.annual_average)?,
            credits_earned: check_credits(dto.credits_earned)?.unwrap_or(0),
            board_decision: parse_optional_enum::<BoardDecision>(
                "Board decision",
                dto.board_decision.as_deref(),
            )?,
            honors: parse_optional_enum::<Honors>("Honors", dto.honors.as_deref())?,
            ranking: check_ranking(dto.ranking)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAnnualResultParams {
    pub annual_average: Option<f64>,
    pub credits_earned: Option<i32>,
    pub board_decision: Option<BoardDecision>,
    pub honors: Option<Honors>,
    pub ranking: Option<i32>,
}

impl UpdateAnnualResultParams {
    pub fn from_dto(dto: UpdateAnnualResultDto) -> Result<Self, AppError> {
        Ok(Self {
            annual_average: check_average(dto.annual_average)?,
            credits_earned: check_credits(dto.credits_earned)?,
            board_decision: parse_optional_enum::<BoardDecision>(
                "Board decision",
                dto.board_decision.as_deref(),
            )?,
            honors: parse_optional_enum::<Honors>("Honors", dto.honors.as_deref())?,
            ranking: check_ranking(dto.ranking)?,
        })
    }
}

/// Outcome of a registration's grades, before it is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatedAnnualResult {
    pub registration_id: i32,
    pub academic_year: String,
    pub annual_average: Option<f64>,
    pub credits_earned: i32,
    pub board_decision: Option<BoardDecision>,
    pub honors: Option<Honors>,
    pub graded_courses: usize,
}

impl CalculatedAnnualResult {
    pub fn into_dto(self) -> CalculatedAnnualResultDto {
        CalculatedAnnualResultDto {
            registration_id: self.registration_id,
            academic_year: self.academic_year,
            annual_average: self.annual_average,
            credits_earned: self.credits_earned,
            board_decision: self.board_decision.map(|d| d.to_value()),
            honors: self.honors.map(|h| h.to_value()),
            graded_courses: self.graded_courses,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnnualResultStats {
    pub academic_year: String,
    pub total_results: u64,
    pub graded_results: u64,
    pub average: Option<f64>,
    pub highest: Option<f64>,
    pub lowest: Option<f64>,
    pub decision_stats: BTreeMap<String, u64>,
    pub honors_stats: BTreeMap<String, u64>,
}

impl AnnualResultStats {
    /// Percentage of results admitted to the next year.
    pub fn admission_rate(&self) -> f64 {
        if self.total_results == 0 {
            return 0.0;
        }

        let admitted = self
            .decision_stats
            .get(&BoardDecision::Admitted.to_value())
            .copied()
            .unwrap_or(0);

        round2(admitted as f64 * 100.0 / self.total_results as f64)
    }

    pub fn into_dto(self) -> AnnualResultStatsDto {
        let admission_rate = self.admission_rate();

        AnnualResultStatsDto {
            academic_year: self.academic_year,
            total_results: self.total_results,
            graded_results: self.graded_results,
            average: self.average.map(round2),
            highest: self.highest,
            lowest: self.lowest,
            decision_stats: self.decision_stats,
            honors_stats: self.honors_stats,
            admission_rate,
        }
    }
}

/// A student's annual results, latest academic year first.
#[derive(Debug, Clone)]
pub struct StudentAnnualSummary {
    pub student: entity::student::Model,
    pub results: Vec<AnnualResultRecord>,
}

impl StudentAnnualSummary {
    pub fn total_credits(&self) -> i64 {
        self.results
            .iter()
            .map(|r| i64::from(r.result.credits_earned))
            .sum()
    }

    /// Mean of the annual averages present.
    pub fn cumulative_average(&self) -> Option<f64> {
        let averages: Vec<f64> = self
            .results
            .iter()
            .filter_map(|r| r.result.annual_average)
            .collect();

        if averages.is_empty() {
            return None;
        }

        Some(round2(averages.iter().sum::<f64>() / averages.len() as f64))
    }

    pub fn into_dto(self) -> StudentAnnualSummaryDto {
        let total_credits = self.total_credits();
        let cumulative_average = self.cumulative_average();
        let latest_board_decision = self
            .results
            .first()
            .and_then(|r| r.result.board_decision)
            .map(|d| d.to_value());

        StudentAnnualSummaryDto {
            student_id: self.student.id,
            student_number: self.student.student_number,
            years_completed: self.results.len(),
            total_credits,
            cumulative_average,
            latest_board_decision,
            results: self
                .results
                .into_iter()
                .map(AnnualResultRecord::into_dto)
                .collect(),
        }
    }
}

/// Rounds to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
