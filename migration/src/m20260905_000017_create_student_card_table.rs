use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000004_create_student_table::Student;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentCard::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentCard::Id))
                    .col(integer(StudentCard::StudentId))
                    .col(string_len_uniq(StudentCard::CardNumber, 50))
                    .col(text_null(StudentCard::QrCode))
                    .col(date(StudentCard::IssueDate))
                    .col(date(StudentCard::ExpirationDate))
                    .col(string_len(StudentCard::Status, 16).default("active"))
                    .col(
                        timestamp(StudentCard::RequestDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_len(StudentCard::RequestType, 16).default("creation"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_card_student_id")
                            .from(StudentCard::Table, StudentCard::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentCard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudentCard {
    #[sea_orm(iden = "student_cards")]
    Table,
    Id,
    StudentId,
    CardNumber,
    QrCode,
    IssueDate,
    ExpirationDate,
    Status,
    RequestDate,
    RequestType,
}
