use super::*;

/// Tests deleting an unreferenced university.
///
/// Expected: Ok and the university is gone
#[tokio::test]
async fn deletes_unreferenced_university() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;

    let service = UniversityService::new(db);
    service.delete(university.id).await?;

    assert!(matches!(
        service.get_by_id(university.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a university that still has news.
///
/// Expected: Err(Dependency) and the university is kept
#[tokio::test]
async fn refuses_university_with_dependents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    factory::news::create_news(db, university.id).await?;

    let service = UniversityService::new(db);
    let result = service.delete(university.id).await;

    assert!(matches!(result, Err(AppError::Dependency(_))));
    assert!(service.get_by_id(university.id).await.is_ok());

    Ok(())
}

/// Tests deleting a university that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_university() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UniversityService::new(db).delete(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
