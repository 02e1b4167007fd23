use super::*;

fn competition_params(university_id: i32) -> CreateCompetitionParams {
    let now = Utc::now();
    CreateCompetitionParams {
        university_id,
        name: "Concours Licence 1".to_string(),
        competition_type: CompetitionType::Bachelor,
        opening_date: now,
        closing_date: now + Duration::days(45),
        application_fee: Some(10000.0),
        description: None,
        status: CompetitionStatus::Open,
    }
}

/// Tests creating a competition.
///
/// Expected: Ok with its university attached
#[tokio::test]
async fn creates_competition() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;

    let competition = CompetitionService::new(db)
        .create(competition_params(university.id))
        .await?;

    assert_eq!(competition.competition.name, "Concours Licence 1");
    assert_eq!(competition.university.map(|u| u.id), Some(university.id));

    Ok(())
}

/// Tests creating a competition for a university that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_university() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CompetitionService::new(db)
        .create(competition_params(12))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests moving the closing date before the stored opening date.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn update_rejects_inverted_dates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let competition = factory::competition::create_competition(db, university.id).await?;

    let result = CompetitionService::new(db)
        .update(
            competition.id,
            UpdateCompetitionParams {
                closing_date: Some(competition.opening_date - Duration::days(1)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
