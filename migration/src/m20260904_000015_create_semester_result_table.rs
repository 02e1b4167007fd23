use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260903_000010_create_semester_table::Semester,
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
                    .table(SemesterResult::Table)
                    .if_not_exists()
                    .col(pk_auto(SemesterResult::Id))
                    .col(integer(SemesterResult::RegistrationId))
                    .col(integer(SemesterResult::SemesterId))
                    .col(double_null(SemesterResult::SemesterAverage))
                    .col(integer(SemesterResult::CreditsEarned).default(0))
                    .col(string_len_null(SemesterResult::Decision, 16))
                    .col(integer_null(SemesterResult::Ranking))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_semester_result_registration_id")
                            .from(SemesterResult::Table, SemesterResult::RegistrationId)
                            .to(StudentRegistration::Table, StudentRegistration::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_semester_result_semester_id")
                            .from(SemesterResult::Table, SemesterResult::SemesterId)
                            .to(Semester::Table, Semester::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SemesterResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SemesterResult {
    #[sea_orm(iden = "semester_results")]
    Table,
    Id,
    RegistrationId,
    SemesterId,
    SemesterAverage,
    CreditsEarned,
    Decision,
    Ranking,
}
