use super::*;

/// Tests deleting a competition without applications.
///
/// Expected: Ok and the competition is gone
#[tokio::test]
async fn deletes_unused_competition() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let competition = factory::competition::create_competition(db, university.id).await?;

    let service = CompetitionService::new(db);
    service.delete(competition.id).await?;

    assert!(matches!(
        service.get_by_id(competition.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a competition that received an application.
///
/// Expected: Err(Dependency)
#[tokio::test]
async fn refuses_competition_with_applications() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, competition, _) = factory::helpers::create_applicant_with_application(db).await?;

    let result = CompetitionService::new(db).delete(competition.id).await;

    assert!(matches!(result, Err(AppError::Dependency(_))));

    Ok(())
}
