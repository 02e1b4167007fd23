use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000002_create_person_table::Person;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Applicant::Table)
                    .if_not_exists()
                    .col(pk_auto(Applicant::Id))
                    .col(integer_uniq(Applicant::PersonId))
                    .col(string_len_uniq(Applicant::ApplicationCode, 50))
                    .col(
                        timestamp(Applicant::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applicant_person_id")
                            .from(Applicant::Table, Applicant::PersonId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Applicant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Applicant {
    #[sea_orm(iden = "applicants")]
    Table,
    Id,
    PersonId,
    ApplicationCode,
    CreatedAt,
}
