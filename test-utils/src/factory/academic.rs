//! Factories for the academic hierarchy.
//!
//! Program, specialization, semester, teaching unit and course rows rarely need
//! customization in tests, so only courses get a builder; the rest use plain
//! `create_*` functions with fixed defaults.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::{ProgramLevel, TeachingUnitType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a bachelor program for the given university.
pub async fn create_program(
    db: &DatabaseConnection,
    university_id: i32,
) -> Result<entity::program::Model, DbErr> {
    let id = next_id();
    entity::program::ActiveModel {
        university_id: ActiveValue::Set(university_id),
        code: ActiveValue::Set(format!("PRG{}", id)),
        name: ActiveValue::Set(format!("Program {}", id)),
        level: ActiveValue::Set(ProgramLevel::Bachelor),
        field: ActiveValue::Set(Some("Computer Science".to_string())),
        description: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a three-year specialization for the given program.
pub async fn create_specialization(
    db: &DatabaseConnection,
    program_id: i32,
) -> Result<entity::specialization::Model, DbErr> {
    let id = next_id();
    entity::specialization::ActiveModel {
        program_id: ActiveValue::Set(program_id),
        code: ActiveValue::Set(format!("SPE{}", id)),
        name: ActiveValue::Set(format!("Specialization {}", id)),
        duration_years: ActiveValue::Set(3),
        total_credits: ActiveValue::Set(180),
        description: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates the first semester of the given specialization.
pub async fn create_semester(
    db: &DatabaseConnection,
    specialization_id: i32,
) -> Result<entity::semester::Model, DbErr> {
    entity::semester::ActiveModel {
        specialization_id: ActiveValue::Set(specialization_id),
        number: ActiveValue::Set(1),
        name: ActiveValue::Set(Some("Semester 1".to_string())),
        credits: ActiveValue::Set(30),
        study_year: ActiveValue::Set(1),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a fundamental teaching unit for the given semester.
pub async fn create_teaching_unit(
    db: &DatabaseConnection,
    semester_id: i32,
) -> Result<entity::teaching_unit::Model, DbErr> {
    let id = next_id();
    entity::teaching_unit::ActiveModel {
        semester_id: ActiveValue::Set(semester_id),
        code: ActiveValue::Set(format!("UE{}", id)),
        name: ActiveValue::Set(format!("Teaching Unit {}", id)),
        credits: ActiveValue::Set(6),
        unit_type: ActiveValue::Set(Some(TeachingUnitType::Fundamental)),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Factory for creating test courses with an optional teacher.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    teaching_unit_id: i32,
    teacher_id: Option<i32>,
    code: String,
    name: String,
    coefficient: f64,
    credits: i32,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - teacher_id: `None`
    /// - code: `"CRS{id}"`
    /// - name: `"Course {id}"`
    /// - coefficient: `1.0`
    /// - credits: `3`
    pub fn new(db: &'a DatabaseConnection, teaching_unit_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            teaching_unit_id,
            teacher_id: None,
            code: format!("CRS{}", id),
            name: format!("Course {}", id),
            coefficient: 1.0,
            credits: 3,
        }
    }

    pub fn teacher_id(mut self, teacher_id: Option<i32>) -> Self {
        self.teacher_id = teacher_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn coefficient(mut self, coefficient: f64) -> Self {
        self.coefficient = coefficient;
        self
    }

    pub fn credits(mut self, credits: i32) -> Self {
        self.credits = credits;
        self
    }

    /// Builds and inserts the course entity into the database.
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            teaching_unit_id: ActiveValue::Set(self.teaching_unit_id),
            teacher_id: ActiveValue::Set(self.teacher_id),
            code: ActiveValue::Set(self.code),
            name: ActiveValue::Set(self.name),
            total_hours: ActiveValue::Set(Some(45)),
            lecture_hours: ActiveValue::Set(Some(21)),
            tutorial_hours: ActiveValue::Set(Some(12)),
            practical_hours: ActiveValue::Set(Some(12)),
            coefficient: ActiveValue::Set(self.coefficient),
            credits: ActiveValue::Set(self.credits),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
