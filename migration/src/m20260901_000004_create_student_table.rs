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
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(integer_uniq(Student::PersonId))
                    .col(integer(Student::UniversityId))
                    .col(string_len_uniq(Student::StudentNumber, 50))
                    .col(string_null(Student::AcademicEmail).unique_key())
                    .col(date(Student::AdmissionDate))
                    .col(string_len(Student::Status, 16).default("active"))
                    .col(string_len_null(Student::AdmissionType, 16))
                    .col(string_null(Student::HighSchoolOrigin))
                    .col(integer_null(Student::BaccalaureateYear))
                    .col(string_len_null(Student::BaccalaureateSeries, 50))
                    .col(
                        timestamp(Student::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_person_id")
                            .from(Student::Table, Student::PersonId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_university_id")
                            .from(Student::Table, Student::UniversityId)
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
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    PersonId,
    UniversityId,
    StudentNumber,
    AcademicEmail,
    AdmissionDate,
    Status,
    AdmissionType,
    HighSchoolOrigin,
    BaccalaureateYear,
    BaccalaureateSeries,
    CreatedAt,
}
