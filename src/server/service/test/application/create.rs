use super::*;

/// Tests filing an application.
///
/// Expected: Ok with a pending application and its competition
#[tokio::test]
async fn files_pending_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let competition = factory::competition::create_competition(db, university.id).await?;
    let (_, applicant) = factory::applicant::create_applicant(db).await?;

    let application = ApplicationService::new(db)
        .create(CreateApplicationParams {
            applicant_id: applicant.id,
            competition_id: competition.id,
            file: None,
        })
        .await?;

    assert_eq!(application.application.status, ApplicationStatus::Pending);
    assert_eq!(
        application.competition.map(|c| c.competition.id),
        Some(competition.id)
    );

    Ok(())
}

/// Tests filing an application to a competition that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_competition() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, applicant) = factory::applicant::create_applicant(db).await?;

    let result = ApplicationService::new(db)
        .create(CreateApplicationParams {
            applicant_id: applicant.id,
            competition_id: 77,
            file: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests changing an application's status.
///
/// Expected: Ok with the new status
#[tokio::test]
async fn updates_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, application) = factory::helpers::create_applicant_with_application(db).await?;

    let updated = ApplicationService::new(db)
        .update_status(application.id, ApplicationStatus::Validated)
        .await?;

    assert_eq!(updated.application.status, ApplicationStatus::Validated);

    Ok(())
}
