use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000003_create_user_table::User,
    m20260903_000011_create_teaching_unit_table::TeachingUnit,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(integer(Course::TeachingUnitId))
                    .col(integer_null(Course::TeacherId))
                    .col(string_len(Course::Code, 20))
                    .col(string(Course::Name))
                    .col(integer_null(Course::TotalHours))
                    .col(integer_null(Course::LectureHours))
                    .col(integer_null(Course::TutorialHours))
                    .col(integer_null(Course::PracticalHours))
                    .col(double(Course::Coefficient).default(1.0))
                    .col(integer(Course::Credits).default(3))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_teaching_unit_id")
                            .from(Course::Table, Course::TeachingUnitId)
                            .to(TeachingUnit::Table, TeachingUnit::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_teacher_id")
                            .from(Course::Table, Course::TeacherId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    TeachingUnitId,
    TeacherId,
    Code,
    Name,
    TotalHours,
    LectureHours,
    TutorialHours,
    PracticalHours,
    Coefficient,
    Credits,
}
