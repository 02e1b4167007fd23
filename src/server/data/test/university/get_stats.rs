use super::*;
use entity::sea_orm_active_enums::{PersonType, StudentStatus};

/// Tests the per-university headcounts.
///
/// Expected: counts only rows of the requested university
#[tokio::test]
async fn counts_rows_of_university() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let other = factory::university::create_university(db).await?;

    factory::student::create_student(db, university.id).await?;
    let person = factory::person::create_person(db, PersonType::Student).await?;
    factory::student::StudentFactory::new(db, person.id, university.id)
        .status(StudentStatus::Graduated)
        .build()
        .await?;
    factory::student::create_student(db, other.id).await?;
    factory::user::create_user(db, university.id).await?;
    factory::academic::create_program(db, university.id).await?;
    factory::competition::create_competition(db, university.id).await?;
    factory::news::create_news(db, university.id).await?;

    let repo = UniversityRepository::new(db);
    let stats = repo.get_stats(university.id).await?;

    assert_eq!(stats.university_id, university.id);
    assert_eq!(stats.total_students, 2);
    assert_eq!(stats.active_students, 1);
    assert_eq!(stats.total_users, 1);
    assert_eq!(stats.total_programs, 1);
    assert_eq!(stats.total_competitions, 1);
    assert_eq!(stats.total_news, 1);

    assert_eq!(repo.count_dependents(university.id).await?, 6);
    assert_eq!(repo.count_dependents(other.id).await?, 1);

    Ok(())
}
