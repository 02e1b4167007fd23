use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000001_create_university_table::University,
    m20260901_000002_create_person_table::Person,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(integer_uniq(User::PersonId))
                    .col(integer(User::UniversityId))
                    .col(string_len_uniq(User::EmployeeId, 50))
                    .col(string_uniq(User::Email))
                    .col(string_len_null(User::Phone, 20))
                    .col(string_len(User::Role, 24))
                    .col(string_len(User::Status, 16).default("active"))
                    .col(date_null(User::HireDate))
                    .col(
                        timestamp(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_person_id")
                            .from(User::Table, User::PersonId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_university_id")
                            .from(User::Table, User::UniversityId)
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
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    PersonId,
    UniversityId,
    EmployeeId,
    Email,
    Phone,
    Role,
    Status,
    HireDate,
    CreatedAt,
}
