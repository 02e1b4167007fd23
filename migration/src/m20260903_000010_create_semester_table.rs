use sea_orm_migration::{prelude::*, schema::*};

use super::m20260903_000009_create_specialization_table::Specialization;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Semester::Table)
                    .if_not_exists()
                    .col(pk_auto(Semester::Id))
                    .col(integer(Semester::SpecializationId))
                    .col(integer(Semester::Number))
                    .col(string_len_null(Semester::Name, 50))
                    .col(integer(Semester::Credits).default(30))
                    .col(integer(Semester::StudyYear))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_semester_specialization_id")
                            .from(Semester::Table, Semester::SpecializationId)
                            .to(Specialization::Table, Specialization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Semester::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Semester {
    #[sea_orm(iden = "semesters")]
    Table,
    Id,
    SpecializationId,
    Number,
    Name,
    Credits,
    StudyYear,
}
