use super::*;

/// Tests the duplicate check for a code used by another university.
///
/// Expected: true
#[tokio::test]
async fn detects_code_of_other_university() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::UniversityFactory::new(db)
        .code("UCAD")
        .build()
        .await?;

    let repo = UniversityRepository::new(db);

    assert!(repo.code_taken("UCAD", None).await?);
    assert!(repo.code_taken("UCAD", Some(university.id + 1)).await?);

    Ok(())
}

/// Tests that a university does not collide with its own code.
///
/// Expected: false when the owner is excluded
#[tokio::test]
async fn ignores_excluded_university() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::UniversityFactory::new(db)
        .code("UGB")
        .build()
        .await?;

    let repo = UniversityRepository::new(db);

    assert!(!repo.code_taken("UGB", Some(university.id)).await?);
    assert!(!repo.code_taken("UADB", None).await?);

    Ok(())
}
