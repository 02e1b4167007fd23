use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::academic::{
    CourseWithUnit, GradeWithCourse, RegistrationWithSpecialization,
};

/// Read access to registrations, grades, results, cards and courses.
pub struct AcademicRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AcademicRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a student's registrations, latest academic year first
    pub async fn get_registrations(
        &self,
        student_id: i32,
    ) -> Result<Vec<RegistrationWithSpecialization>, DbErr> {
        let registrations = entity::prelude::StudentRegistration::find()
            .filter(entity::student_registration::Column::StudentId.eq(student_id))
            .order_by_desc(entity::student_registration::Column::AcademicYear)
            .order_by_desc(entity::student_registration::Column::Id)
            .all(self.db)
            .await?;

        self.with_specializations(registrations).await
    }

    pub async fn find_registration(
        &self,
        id: i32,
    ) -> Result<Option<entity::student_registration::Model>, DbErr> {
        entity::prelude::StudentRegistration::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets registrations with specialization and program keyed by registration ID
    pub async fn get_registrations_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, RegistrationWithSpecialization>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let registrations = entity::prelude::StudentRegistration::find()
            .filter(entity::student_registration::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(self
            .with_specializations(registrations)
            .await?
            .into_iter()
            .map(|r| (r.registration.id, r))
            .collect())
    }

    /// Gets the registration of a student for one academic year
    pub async fn get_registration_for_year(
        &self,
        student_id: i32,
        academic_year: &str,
    ) -> Result<Option<RegistrationWithSpecialization>, DbErr> {
        let registration = entity::prelude::StudentRegistration::find()
            .filter(entity::student_registration::Column::StudentId.eq(student_id))
            .filter(entity::student_registration::Column::AcademicYear.eq(academic_year))
            .order_by_desc(entity::student_registration::Column::Id)
            .one(self.db)
            .await?;

        Ok(self
            .with_specializations(registration.into_iter().collect())
            .await?
            .pop())
    }

    /// Gets the most recent registration of each student keyed by student ID
    pub async fn get_latest_registrations(
        &self,
        student_ids: Vec<i32>,
    ) -> Result<HashMap<i32, RegistrationWithSpecialization>, DbErr> {
        if student_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let registrations = entity::prelude::StudentRegistration::find()
            .filter(entity::student_registration::Column::StudentId.is_in(student_ids))
            .order_by_desc(entity::student_registration::Column::AcademicYear)
            .order_by_desc(entity::student_registration::Column::Id)
            .all(self.db)
            .await?;

        let mut latest = HashMap::new();
        for registration in self.with_specializations(registrations).await? {
            latest
                .entry(registration.registration.student_id)
                .or_insert(registration);
        }

        Ok(latest)
    }

    /// Gets the most recent grades of a student with their courses
    pub async fn get_recent_grades(
        &self,
        student_id: i32,
        limit: u64,
    ) -> Result<Vec<GradeWithCourse>, DbErr> {
        let grades = entity::prelude::Grade::find()
            .filter(entity::grade::Column::StudentId.eq(student_id))
            .order_by_desc(entity::grade::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.with_courses(grades).await
    }

    /// Gets grades for a set of registrations keyed by registration ID
    pub async fn get_grades_by_registration(
        &self,
        registration_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<GradeWithCourse>>, DbErr> {
        if registration_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let grades = entity::prelude::Grade::find()
            .filter(entity::grade::Column::RegistrationId.is_in(registration_ids))
            .order_by_asc(entity::grade::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<GradeWithCourse>> = HashMap::new();
        for grade in self.with_courses(grades).await? {
            grouped
                .entry(grade.grade.registration_id)
                .or_default()
                .push(grade);
        }

        Ok(grouped)
    }

    pub async fn get_semester_results(
        &self,
        registration_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<entity::semester_result::Model>>, DbErr> {
        if registration_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let results = entity::prelude::SemesterResult::find()
            .filter(entity::semester_result::Column::RegistrationId.is_in(registration_ids))
            .order_by_asc(entity::semester_result::Column::SemesterId)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<entity::semester_result::Model>> = HashMap::new();
        for result in results {
            grouped.entry(result.registration_id).or_default().push(result);
        }

        Ok(grouped)
    }

    pub async fn get_annual_results(
        &self,
        registration_ids: Vec<i32>,
    ) -> Result<HashMap<i32, entity::annual_result::Model>, DbErr> {
        if registration_ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::AnnualResult::find()
            .filter(entity::annual_result::Column::RegistrationId.is_in(registration_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| (r.registration_id, r))
            .collect())
    }

    /// Gets a student's cards, most recently issued first
    pub async fn get_cards(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::student_card::Model>, DbErr> {
        entity::prelude::StudentCard::find()
            .filter(entity::student_card::Column::StudentId.eq(student_id))
            .order_by_desc(entity::student_card::Column::IssueDate)
            .all(self.db)
            .await
    }

    /// Gets the courses taught by each teacher keyed by user ID
    pub async fn get_courses_by_teacher(
        &self,
        teacher_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<CourseWithUnit>>, DbErr> {
        if teacher_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let courses = entity::prelude::Course::find()
            .filter(entity::course::Column::TeacherId.is_in(teacher_ids))
            .order_by_asc(entity::course::Column::Code)
            .find_also_related(entity::prelude::TeachingUnit)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<CourseWithUnit>> = HashMap::new();
        for (course, teaching_unit) in courses {
            if let Some(teacher_id) = course.teacher_id {
                grouped.entry(teacher_id).or_default().push(CourseWithUnit {
                    course,
                    teaching_unit,
                });
            }
        }

        Ok(grouped)
    }

    /// Attaches specialization and program to each registration
    async fn with_specializations(
        &self,
        registrations: Vec<entity::student_registration::Model>,
    ) -> Result<Vec<RegistrationWithSpecialization>, DbErr> {
        let specialization_ids: Vec<i32> = registrations
            .iter()
            .map(|r| r.specialization_id)
            .collect();

        let specializations: HashMap<i32, (entity::specialization::Model, Option<entity::program::Model>)> =
            if !specialization_ids.is_empty() {
                entity::prelude::Specialization::find()
                    .filter(entity::specialization::Column::Id.is_in(specialization_ids))
                    .find_also_related(entity::prelude::Program)
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(|(s, p)| (s.id, (s, p)))
                    .collect()
            } else {
                HashMap::new()
            };

        Ok(registrations
            .into_iter()
            .map(|registration| {
                let (specialization, program) = match specializations
                    .get(&registration.specialization_id)
                    .cloned()
                {
                    Some((s, p)) => (Some(s), p),
                    None => (None, None),
                };

                RegistrationWithSpecialization {
                    registration,
                    specialization,
                    program,
                }
            })
            .collect())
    }

    /// Attaches course and teaching unit to each grade
    async fn with_courses(
        &self,
        grades: Vec<entity::grade::Model>,
    ) -> Result<Vec<GradeWithCourse>, DbErr> {
        let course_ids: Vec<i32> = grades.iter().map(|g| g.course_id).collect();

        let courses: HashMap<i32, CourseWithUnit> = if !course_ids.is_empty() {
            entity::prelude::Course::find()
                .filter(entity::course::Column::Id.is_in(course_ids))
                .find_also_related(entity::prelude::TeachingUnit)
                .all(self.db)
                .await?
                .into_iter()
                .map(|(course, teaching_unit)| {
                    (
                        course.id,
                        CourseWithUnit {
                            course,
                            teaching_unit,
                        },
                    )
                })
                .collect()
        } else {
            HashMap::new()
        };

        Ok(grades
            .into_iter()
            .map(|grade| {
                let course = courses.get(&grade.course_id).cloned();
                GradeWithCourse { grade, course }
            })
            .collect())
    }
}
