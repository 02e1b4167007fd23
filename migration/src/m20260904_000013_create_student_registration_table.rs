use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000004_create_student_table::Student,
    m20260903_000009_create_specialization_table::Specialization,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentRegistration::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentRegistration::Id))
                    .col(integer(StudentRegistration::StudentId))
                    .col(integer(StudentRegistration::SpecializationId))
                    .col(string_len(StudentRegistration::AcademicYear, 9))
                    .col(integer(StudentRegistration::StudyLevel).default(1))
                    .col(
                        timestamp(StudentRegistration::RegistrationDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_registration_student_id")
                            .from(StudentRegistration::Table, StudentRegistration::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_registration_specialization_id")
                            .from(
                                StudentRegistration::Table,
                                StudentRegistration::SpecializationId,
                            )
                            .to(Specialization::Table, Specialization::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentRegistration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudentRegistration {
    #[sea_orm(iden = "student_registrations")]
    Table,
    Id,
    StudentId,
    SpecializationId,
    AcademicYear,
    StudyLevel,
    RegistrationDate,
}
