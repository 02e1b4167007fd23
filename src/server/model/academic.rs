//! Academic record domain models.
//!
//! Records combine a registration, grade or course row with the rows needed to render
//! it: specialization and program for registrations, teaching unit for courses.

use sea_orm::ActiveEnum;

use crate::model::academic::{
    AnnualResultDto, CourseDto, GradeDto, ProgramSummaryDto, RegistrationDto,
    RegistrationRecordDto, SemesterResultDto, SpecializationSummaryDto, StudentCardDto,
    TeachingUnitSummaryDto,
};

impl From<entity::program::Model> for ProgramSummaryDto {
    fn from(p: entity::program::Model) -> Self {
        Self {
            id: p.id,
            code: p.code,
            name: p.name,
            level: p.level.to_value(),
        }
    }
}

impl From<entity::teaching_unit::Model> for TeachingUnitSummaryDto {
    fn from(t: entity::teaching_unit::Model) -> Self {
        Self {
            id: t.id,
            code: t.code,
            name: t.name,
            credits: t.credits,
            unit_type: t.unit_type.map(|u| u.to_value()),
        }
    }
}

impl From<entity::semester_result::Model> for SemesterResultDto {
    fn from(r: entity::semester_result::Model) -> Self {
        Self {
            id: r.id,
            semester_id: r.semester_id,
            semester_average: r.semester_average,
            credits_earned: r.credits_earned,
            decision: r.decision.map(|d| d.to_value()),
            ranking: r.ranking,
        }
    }
}

impl From<entity::annual_result::Model> for AnnualResultDto {
    fn from(r: entity::annual_result::Model) -> Self {
        Self {
            id: r.id,
            academic_year: r.academic_year,
            annual_average: r.annual_average,
            credits_earned: r.credits_earned,
            board_decision: r.board_decision.map(|d| d.to_value()),
            honors: r.honors.map(|h| h.to_value()),
            ranking: r.ranking,
        }
    }
}

impl From<entity::student_card::Model> for StudentCardDto {
    fn from(c: entity::student_card::Model) -> Self {
        Self {
            id: c.id,
            card_number: c.card_number,
            issue_date: c.issue_date,
            expiration_date: c.expiration_date,
            status: c.status.to_value(),
            request_type: c.request_type.to_value(),
        }
    }
}

/// Registration with its specialization and the program above it.
#[derive(Debug, Clone)]
pub struct RegistrationWithSpecialization {
    pub registration: entity::student_registration::Model,
    pub specialization: Option<entity::specialization::Model>,
    pub program: Option<entity::program::Model>,
}

impl RegistrationWithSpecialization {
    pub fn into_dto(self) -> RegistrationDto {
        let program = self.program.map(Into::into);

        RegistrationDto {
            id: self.registration.id,
            student_id: self.registration.student_id,
            specialization_id: self.registration.specialization_id,
            academic_year: self.registration.academic_year,
            study_level: self.registration.study_level,
            registration_date: self.registration.registration_date,
            specialization: self.specialization.map(|s| SpecializationSummaryDto {
                id: s.id,
                code: s.code,
                name: s.name,
                program,
            }),
        }
    }
}

/// Course with the teaching unit it belongs to.
#[derive(Debug, Clone)]
pub struct CourseWithUnit {
    pub course: entity::course::Model,
    pub teaching_unit: Option<entity::teaching_unit::Model>,
}

impl CourseWithUnit {
    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.course.id,
            code: self.course.code,
            name: self.course.name,
            teacher_id: self.course.teacher_id,
            coefficient: self.course.coefficient,
            credits: self.course.credits,
            total_hours: self.course.total_hours,
            teaching_unit: self.teaching_unit.map(Into::into),
        }
    }
}

/// Grade with its course.
#[derive(Debug, Clone)]
pub struct GradeWithCourse {
    pub grade: entity::grade::Model,
    pub course: Option<CourseWithUnit>,
}

impl GradeWithCourse {
    pub fn into_dto(self) -> GradeDto {
        GradeDto {
            id: self.grade.id,
            course_id: self.grade.course_id,
            registration_id: self.grade.registration_id,
            continuous_assessment: self.grade.continuous_assessment,
            exam_grade: self.grade.exam_grade,
            course_average: self.grade.course_average,
            validation_status: self.grade.validation_status.to_value(),
            earned_credits: self.grade.earned_credits,
            session: self.grade.session,
            comments: self.grade.comments,
            course: self.course.map(CourseWithUnit::into_dto),
        }
    }
}

/// One academic year of a student's record.
#[derive(Debug, Clone)]
pub struct RegistrationRecord {
    pub registration: RegistrationWithSpecialization,
    pub grades: Vec<GradeWithCourse>,
    pub semester_results: Vec<entity::semester_result::Model>,
    pub annual_result: Option<entity::annual_result::Model>,
}

impl RegistrationRecord {
    pub fn into_dto(self) -> RegistrationRecordDto {
        RegistrationRecordDto {
            registration: self.registration.into_dto(),
            grades: self
                .grades
                .into_iter()
                .map(GradeWithCourse::into_dto)
                .collect(),
            semester_results: self.semester_results.into_iter().map(Into::into).collect(),
            annual_result: self.annual_result.map(Into::into),
        }
    }
}
