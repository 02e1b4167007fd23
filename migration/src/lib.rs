pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_university_table;
mod m20260901_000002_create_person_table;
mod m20260901_000003_create_user_table;
mod m20260901_000004_create_student_table;
mod m20260902_000005_create_applicant_table;
mod m20260902_000006_create_competition_table;
mod m20260902_000007_create_application_table;
mod m20260903_000008_create_program_table;
mod m20260903_000009_create_specialization_table;
mod m20260903_000010_create_semester_table;
mod m20260903_000011_create_teaching_unit_table;
mod m20260903_000012_create_course_table;
mod m20260904_000013_create_student_registration_table;
mod m20260904_000014_create_grade_table;
mod m20260904_000015_create_semester_result_table;
mod m20260904_000016_create_annual_result_table;
mod m20260905_000017_create_student_card_table;
mod m20260905_000018_create_news_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_university_table::Migration),
            Box::new(m20260901_000002_create_person_table::Migration),
            Box::new(m20260901_000003_create_user_table::Migration),
            Box::new(m20260901_000004_create_student_table::Migration),
            Box::new(m20260902_000005_create_applicant_table::Migration),
            Box::new(m20260902_000006_create_competition_table::Migration),
            Box::new(m20260902_000007_create_application_table::Migration),
            Box::new(m20260903_000008_create_program_table::Migration),
            Box::new(m20260903_000009_create_specialization_table::Migration),
            Box::new(m20260903_000010_create_semester_table::Migration),
            Box::new(m20260903_000011_create_teaching_unit_table::Migration),
            Box::new(m20260903_000012_create_course_table::Migration),
            Box::new(m20260904_000013_create_student_registration_table::Migration),
            Box::new(m20260904_000014_create_grade_table::Migration),
            Box::new(m20260904_000015_create_semester_result_table::Migration),
            Box::new(m20260904_000016_create_annual_result_table::Migration),
            Box::new(m20260905_000017_create_student_card_table::Migration),
            Box::new(m20260905_000018_create_news_table::Migration),
        ]
    }
}
