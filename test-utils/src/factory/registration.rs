//! Factories for student registrations and the records hanging off them.

use chrono::{Datelike, Utc};
use entity::sea_orm_active_enums::{
    BoardDecision, GradeValidationStatus, Honors, SemesterDecision,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Returns the academic year label starting in the current calendar year.
///
/// Matches the label the service layer uses to find a student's current registration,
/// e.g. `"2026-2027"` during 2026.
pub fn current_academic_year() -> String {
    let year = Utc::now().year();
    format!("{}-{}", year, year + 1)
}

/// Factory for creating test registrations.
///
/// # Example
///
/// ```rust,ignore
/// let registration = RegistrationFactory::new(&db, student.id, specialization.id)
///     .academic_year("2023-2024")
///     .build()
///     .await?;
/// ```
pub struct RegistrationFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    specialization_id: i32,
    academic_year: String,
    study_level: i32,
}

impl<'a> RegistrationFactory<'a> {
    /// Creates a new RegistrationFactory for the current academic year, level 1.
    pub fn new(db: &'a DatabaseConnection, student_id: i32, specialization_id: i32) -> Self {
        Self {
            db,
            student_id,
            specialization_id,
            academic_year: current_academic_year(),
            study_level: 1,
        }
    }

    pub fn academic_year(mut self, academic_year: impl Into<String>) -> Self {
        self.academic_year = academic_year.into();
        self
    }

    pub fn study_level(mut self, study_level: i32) -> Self {
        self.study_level = study_level;
        self
    }

    /// Builds and inserts the registration entity into the database.
    pub async fn build(self) -> Result<entity::student_registration::Model, DbErr> {
        entity::student_registration::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            specialization_id: ActiveValue::Set(self.specialization_id),
            academic_year: ActiveValue::Set(self.academic_year),
            study_level: ActiveValue::Set(self.study_level),
            registration_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a registration for the current academic year.
pub async fn create_registration(
    db: &DatabaseConnection,
    student_id: i32,
    specialization_id: i32,
) -> Result<entity::student_registration::Model, DbErr> {
    RegistrationFactory::new(db, student_id, specialization_id)
        .build()
        .await
}

/// Factory for creating test grades.
///
/// Defaults to a validated first-session grade averaging 13.2 and worth three credits.
pub struct GradeFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    course_id: i32,
    registration_id: i32,
    course_average: Option<f64>,
    validation_status: GradeValidationStatus,
    earned_credits: i32,
    session: i32,
}

impl<'a> GradeFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        student_id: i32,
        course_id: i32,
        registration_id: i32,
    ) -> Self {
        Self {
            db,
            student_id,
            course_id,
            registration_id,
            course_average: Some(13.2),
            validation_status: GradeValidationStatus::Validated,
            earned_credits: 3,
            session: 1,
        }
    }

    pub fn course_average(mut self, course_average: Option<f64>) -> Self {
        self.course_average = course_average;
        self
    }

    pub fn validation_status(mut self, validation_status: GradeValidationStatus) -> Self {
        self.validation_status = validation_status;
        self
    }

    pub fn earned_credits(mut self, earned_credits: i32) -> Self {
        self.earned_credits = earned_credits;
        self
    }

    pub fn session(mut self, session: i32) -> Self {
        self.session = session;
        self
    }

    pub async fn build(self) -> Result<entity::grade::Model, DbErr> {
        entity::grade::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            course_id: ActiveValue::Set(self.course_id),
            registration_id: ActiveValue::Set(self.registration_id),
            continuous_assessment: ActiveValue::Set(Some(12.0)),
            exam_grade: ActiveValue::Set(Some(14.0)),
            course_average: ActiveValue::Set(self.course_average),
            validation_status: ActiveValue::Set(self.validation_status),
            earned_credits: ActiveValue::Set(self.earned_credits),
            session: ActiveValue::Set(self.session),
            comments: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a validated first-session grade worth three credits.
pub async fn create_grade(
    db: &DatabaseConnection,
    student_id: i32,
    course_id: i32,
    registration_id: i32,
) -> Result<entity::grade::Model, DbErr> {
    GradeFactory::new(db, student_id, course_id, registration_id)
        .build()
        .await
}

/// Creates a validated semester result for the registration.
pub async fn create_semester_result(
    db: &DatabaseConnection,
    registration_id: i32,
    semester_id: i32,
) -> Result<entity::semester_result::Model, DbErr> {
    entity::semester_result::ActiveModel {
        registration_id: ActiveValue::Set(registration_id),
        semester_id: ActiveValue::Set(semester_id),
        semester_average: ActiveValue::Set(Some(12.5)),
        credits_earned: ActiveValue::Set(30),
        decision: ActiveValue::Set(Some(SemesterDecision::Validated)),
        ranking: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Factory for creating test annual results.
///
/// Defaults to an admitted, unranked result averaging 12.5 with 60 credits, in the
/// registration's academic year.
pub struct AnnualResultFactory<'a> {
    db: &'a DatabaseConnection,
    registration_id: i32,
    academic_year: String,
    annual_average: Option<f64>,
    credits_earned: i32,
    board_decision: Option<BoardDecision>,
    honors: Option<Honors>,
    ranking: Option<i32>,
}

impl<'a> AnnualResultFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        registration: &entity::student_registration::Model,
    ) -> Self {
        Self {
            db,
            registration_id: registration.id,
            academic_year: registration.academic_year.clone(),
            annual_average: Some(12.5),
            credits_earned: 60,
            board_decision: Some(BoardDecision::Admitted),
            honors: None,
            ranking: None,
        }
    }

    pub fn annual_average(mut self, annual_average: Option<f64>) -> Self {
        self.annual_average = annual_average;
        self
    }

    pub fn credits_earned(mut self, credits_earned: i32) -> Self {
        self.credits_earned = credits_earned;
        self
    }

    pub fn board_decision(mut self, board_decision: Option<BoardDecision>) -> Self {
        self.board_decision = board_decision;
        self
    }

    pub fn honors(mut self, honors: Option<Honors>) -> Self {
        self.honors = honors;
        self
    }

    pub fn ranking(mut self, ranking: Option<i32>) -> Self {
        self.ranking = ranking;
        self
    }

    pub async fn build(self) -> Result<entity::annual_result::Model, DbErr> {
        entity::annual_result::ActiveModel {
            registration_id: ActiveValue::Set(self.registration_id),
            academic_year: ActiveValue::Set(self.academic_year),
            annual_average: ActiveValue::Set(self.annual_average),
            credits_earned: ActiveValue::Set(self.credits_earned),
            board_decision: ActiveValue::Set(self.board_decision),
            honors: ActiveValue::Set(self.honors),
            ranking: ActiveValue::Set(self.ranking),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an admitted annual result for the registration.
pub async fn create_annual_result(
    db: &DatabaseConnection,
    registration: &entity::student_registration::Model,
) -> Result<entity::annual_result::Model, DbErr> {
    AnnualResultFactory::new(db, registration).build().await
}
