use sea_orm_migration::{prelude::*, schema::*};

use super::m20260903_000010_create_semester_table::Semester;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeachingUnit::Table)
                    .if_not_exists()
                    .col(pk_auto(TeachingUnit::Id))
                    .col(integer(TeachingUnit::SemesterId))
                    .col(string_len(TeachingUnit::Code, 20))
                    .col(string(TeachingUnit::Name))
                    .col(integer(TeachingUnit::Credits).default(6))
                    .col(string_len_null(TeachingUnit::UnitType, 16))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teaching_unit_semester_id")
                            .from(TeachingUnit::Table, TeachingUnit::SemesterId)
                            .to(Semester::Table, Semester::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeachingUnit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeachingUnit {
    #[sea_orm(iden = "teaching_units")]
    Table,
    Id,
    SemesterId,
    Code,
    Name,
    Credits,
    UnitType,
}
