use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(University::Table)
                    .if_not_exists()
                    .col(pk_auto(University::Id))
                    .col(string_len_uniq(University::Code, 20))
                    .col(string(University::Name))
                    .col(text_null(University::Address))
                    .col(string_null(University::City))
                    .col(string_len_null(University::Phone, 20))
                    .col(string_null(University::Email))
                    .col(date_null(University::EstablishmentDate))
                    .col(string_len(University::Status, 16).default("pending"))
                    .col(
                        timestamp(University::RegistrationDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(University::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum University {
    #[sea_orm(iden = "universities")]
    Table,
    Id,
    Code,
    Name,
    Address,
    City,
    Phone,
    Email,
    EstablishmentDate,
    Status,
    RegistrationDate,
}
