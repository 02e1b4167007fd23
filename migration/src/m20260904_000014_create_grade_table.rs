use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000004_create_student_table::Student,
    m20260903_000012_create_course_table::Course,
    m20260904_000013_create_student_registration_table::StudentRegistration,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Grade::Table)
                    .if_not_exists()
                    .col(pk_auto(Grade::Id))
                    .col(integer(Grade::StudentId))
                    .col(integer(Grade::CourseId))
                    .col(integer(Grade::RegistrationId))
                    .col(double_null(Grade::ContinuousAssessment))
                    .col(double_null(Grade::ExamGrade))
                    .col(double_null(Grade::CourseAverage))
                    .col(string_len(Grade::ValidationStatus, 16))
                    .col(integer(Grade::EarnedCredits).default(0))
                    .col(integer(Grade::Session).default(1))
                    .col(text_null(Grade::Comments))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grade_student_id")
                            .from(Grade::Table, Grade::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grade_course_id")
                            .from(Grade::Table, Grade::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grade_registration_id")
                            .from(Grade::Table, Grade::RegistrationId)
                            .to(StudentRegistration::Table, StudentRegistration::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Grade::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Grade {
    #[sea_orm(iden = "grades")]
    Table,
    Id,
    StudentId,
    CourseId,
    RegistrationId,
    ContinuousAssessment,
    ExamGrade,
    CourseAverage,
    ValidationStatus,
    EarnedCredits,
    Session,
    Comments,
}
