use sea_orm_migration::{prelude::*, schema::*};

use super::m20260904_000013_create_student_registration_table::StudentRegistration;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AnnualResult::Table)
                    .if_not_exists()
                    .col(pk_auto(AnnualResult::Id))
                    .col(integer(AnnualResult::RegistrationId))
                    .col(string_len(AnnualResult::AcademicYear, 9))
                    .col(double_null(AnnualResult::AnnualAverage))
                    .col(integer(AnnualResult::CreditsEarned).default(0))
                    .col(string_len_null(AnnualResult::BoardDecision, 16))
                    .col(string_len_null(AnnualResult::Honors, 16))
                    .col(integer_null(AnnualResult::Ranking))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_annual_result_registration_id")
                            .from(AnnualResult::Table, AnnualResult::RegistrationId)
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
            .drop_table(Table::drop().table(AnnualResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AnnualResult {
    #[sea_orm(iden = "annual_results")]
    Table,
    Id,
    RegistrationId,
    AcademicYear,
    AnnualAverage,
    CreditsEarned,
    BoardDecision,
    Honors,
    Ranking,
}
