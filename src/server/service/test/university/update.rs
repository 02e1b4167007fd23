use super::*;

/// Tests renaming a university to a code held by another.
///
/// Expected: Err(Duplicate)
#[tokio::test]
async fn rejects_code_of_other_university() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::university::UniversityFactory::new(db)
        .code("UCAD")
        .build()
        .await?;
    let university = factory::university::create_university(db).await?;

    let result = UniversityService::new(db)
        .update(
            university.id,
            UpdateUniversityParams {
                code: Some("UCAD".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Duplicate(_))));

    Ok(())
}

/// Tests keeping the university's own code in an update.
///
/// Expected: Ok with the code unchanged
#[tokio::test]
async fn accepts_own_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;

    let updated = UniversityService::new(db)
        .update(
            university.id,
            UpdateUniversityParams {
                code: Some(university.code.clone()),
                city: Some("Thies".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.code, university.code);
    assert_eq!(updated.city.as_deref(), Some("Thies"));

    Ok(())
}

/// Tests updating a university that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_university() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UniversityService::new(db)
        .update(7, UpdateUniversityParams::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
