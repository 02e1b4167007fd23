use sea_orm_migration::{prelude::*, schema::*};

use super::m20260903_000008_create_program_table::Program;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Specialization::Table)
                    .if_not_exists()
                    .col(pk_auto(Specialization::Id))
                    .col(integer(Specialization::ProgramId))
                    .col(string_len(Specialization::Code, 20))
                    .col(string(Specialization::Name))
                    .col(integer(Specialization::DurationYears).default(3))
                    .col(integer(Specialization::TotalCredits).default(180))
                    .col(text_null(Specialization::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_specialization_program_id")
                            .from(Specialization::Table, Specialization::ProgramId)
                            .to(Program::Table, Program::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Specialization::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Specialization {
    #[sea_orm(iden = "specializations")]
    Table,
    Id,
    ProgramId,
    Code,
    Name,
    DurationYears,
    TotalCredits,
    Description,
}
