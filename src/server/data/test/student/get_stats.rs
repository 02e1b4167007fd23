use super::*;
use entity::sea_orm_active_enums::PersonType;

/// Tests the status and admission breakdowns.
///
/// Expected: every status and admission type keyed, zeros included
#[tokio::test]
async fn breaks_down_by_status_and_admission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    factory::student::create_student(db, university.id).await?;

    let person = factory::person::create_person(db, PersonType::Student).await?;
    factory::student::StudentFactory::new(db, person.id, university.id)
        .status(StudentStatus::Graduated)
        .admission_type(None)
        .build()
        .await?;

    let stats = StudentRepository::new(db).get_stats(None).await?;

    assert_eq!(stats.total_students, 2);
    assert_eq!(stats.active_students, 1);
    assert_eq!(stats.status_stats.len(), 6);
    assert_eq!(stats.status_stats["graduated"], 1);
    assert_eq!(stats.status_stats["expelled"], 0);
    assert_eq!(stats.admission_stats["regular"], 1);
    assert_eq!(stats.admission_stats["international"], 0);
    assert_eq!(stats.admission_stats["unspecified"], 1);

    Ok(())
}

/// Tests the baccalaureate year ranking.
///
/// Expected: at most five years, most recent first
#[tokio::test]
async fn keeps_five_most_recent_bac_years() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;

    for year in [2018, 2019, 2020, 2021, 2022, 2023, 2023] {
        let person = factory::person::create_person(db, PersonType::Student).await?;
        factory::student::StudentFactory::new(db, person.id, university.id)
            .baccalaureate_year(Some(year))
            .build()
            .await?;
    }

    let stats = StudentRepository::new(db).get_stats(None).await?;

    assert_eq!(
        stats.recent_bac_years,
        vec![(2023, 2), (2022, 1), (2021, 1), (2020, 1), (2019, 1)]
    );

    Ok(())
}

/// Tests scoping the statistics to one university.
///
/// Expected: students of other universities are not counted
#[tokio::test]
async fn scopes_to_university() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let other = factory::university::create_university(db).await?;
    factory::student::create_student(db, university.id).await?;
    factory::student::create_student(db, other.id).await?;
    factory::student::create_student(db, other.id).await?;

    let stats = StudentRepository::new(db)
        .get_stats(Some(university.id))
        .await?;

    assert_eq!(stats.total_students, 1);

    Ok(())
}
