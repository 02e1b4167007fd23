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
                    .table(News::Table)
                    .if_not_exists()
                    .col(pk_auto(News::Id))
                    .col(integer(News::UniversityId))
                    .col(string(News::Title))
                    .col(text(News::Content))
                    .col(
                        timestamp(News::PublicationDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_len(News::NewsType, 16))
                    .col(string_len(News::Status, 16).default("draft"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_university_id")
                            .from(News::Table, News::UniversityId)
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
            .drop_table(Table::drop().table(News::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum News {
    #[sea_orm(iden = "news")]
    Table,
    Id,
    UniversityId,
    Title,
    Content,
    PublicationDate,
    NewsType,
    Status,
}
