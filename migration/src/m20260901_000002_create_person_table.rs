use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(pk_auto(Person::Id))
                    .col(string_len(Person::PersonType, 16))
                    .col(string_len_null(Person::NationalId, 50).unique_key())
                    .col(string_len(Person::FirstName, 100))
                    .col(string_len(Person::LastName, 100))
                    .col(date_null(Person::BirthDate))
                    .col(string_null(Person::BirthPlace))
                    .col(string_len_null(Person::Nationality, 50))
                    .col(text_null(Person::Address))
                    .col(string_len_null(Person::Phone, 20))
                    .col(string_null(Person::PersonalEmail))
                    .col(string_len_null(Person::Gender, 1))
                    .col(
                        timestamp(Person::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Person {
    #[sea_orm(iden = "persons")]
    Table,
    Id,
    PersonType,
    NationalId,
    FirstName,
    LastName,
    BirthDate,
    BirthPlace,
    Nationality,
    Address,
    Phone,
    PersonalEmail,
    Gender,
    CreatedAt,
}
