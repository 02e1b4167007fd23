use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260902_000005_create_applicant_table::Applicant,
    m20260902_000006_create_competition_table::Competition,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    .col(pk_auto(Application::Id))
                    .col(integer(Application::ApplicantId))
                    .col(integer(Application::CompetitionId))
                    .col(
                        timestamp(Application::ApplicationDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_len(Application::Status, 16).default("pending"))
                    .col(text_null(Application::File))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_applicant_id")
                            .from(Application::Table, Application::ApplicantId)
                            .to(Applicant::Table, Applicant::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_competition_id")
                            .from(Application::Table, Application::CompetitionId)
                            .to(Competition::Table, Competition::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Application {
    #[sea_orm(iden = "applications")]
    Table,
    Id,
    ApplicantId,
    CompetitionId,
    ApplicationDate,
    Status,
    File,
}
