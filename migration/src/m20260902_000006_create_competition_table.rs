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
                    .table(Competition::Table)
                    .if_not_exists()
                    .col(pk_auto(Competition::Id))
                    .col(integer(Competition::UniversityId))
                    .col(string(Competition::Name))
                    .col(string_len(Competition::CompetitionType, 24))
                    .col(timestamp(Competition::OpeningDate))
                    .col(timestamp(Competition::ClosingDate))
                    .col(double_null(Competition::ApplicationFee))
                    .col(text_null(Competition::Description))
                    .col(string_len(Competition::Status, 16).default("open"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_competition_university_id")
                            .from(Competition::Table, Competition::UniversityId)
                            .to(University::Table, University::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Competition::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Competition {
    #[sea_orm(iden = "competitions")]
    Table,
    Id,
    UniversityId,
    Name,
    CompetitionType,
    OpeningDate,
    ClosingDate,
    ApplicationFee,
    Description,
    Status,
}
