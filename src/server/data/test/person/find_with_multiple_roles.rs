use super::*;

/// Tests finding persons that are both staff and student.
///
/// Expected: only the person holding both rows
#[tokio::test]
async fn finds_staff_who_study() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;

    let (both, _) = factory::user::create_user(db, university.id).await?;
    factory::student::StudentFactory::new(db, both.id, university.id)
        .build()
        .await?;

    factory::user::create_user(db, university.id).await?;
    factory::student::create_student(db, university.id).await?;

    let results = PersonRepository::new(db).find_with_multiple_roles().await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, both.id);

    Ok(())
}

/// Tests the lookup with no overlapping roles.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    factory::user::create_user(db, university.id).await?;

    let results = PersonRepository::new(db).find_with_multiple_roles().await?;

    assert!(results.is_empty());

    Ok(())
}
