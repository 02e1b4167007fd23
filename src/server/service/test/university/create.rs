use super::*;

/// Tests creating a university with an unused code.
///
/// Expected: Ok with the stored university
#[tokio::test]
async fn creates_university() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let university = UniversityService::new(db)
        .create(university_params("UGB"))
        .await?;

    assert_eq!(university.code, "UGB");
    assert_eq!(university.status, UniversityStatus::Pending);

    Ok(())
}

/// Tests creating a university with a code already in use.
///
/// Expected: Err(Duplicate)
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::university::UniversityFactory::new(db)
        .code("UGB")
        .build()
        .await?;

    let result = UniversityService::new(db)
        .create(university_params("UGB"))
        .await;

    assert!(matches!(result, Err(AppError::Duplicate(_))));

    Ok(())
}
