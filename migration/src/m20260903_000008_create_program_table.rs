use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000001_create_university_table::University;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Program::Table)
                    .if_not_exists()
                    .col(pk_auto(Program::Id))
                    .col(integer(Program::UniversityId))
                    .col(string_len(Program::Code, 20))
                    .col(string(Program::Name))
                    .col(string_len(Program::Level, 16))
                    .col(string_null(Program::Field))
                    .col(text_null(Program::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_program_university_id")
                            .from(Program::Table, Program::UniversityId)
                            .to(University::Table, University::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Program::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Program {
    #[sea_orm(iden = "programs")]
    Table,
    Id,
    UniversityId,
    Code,
    Name,
    Level,
    Field,
    Description,
}
