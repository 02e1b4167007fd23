use super::*;

/// Tests moving every application of one applicant to another.
///
/// Expected: count of moved rows and all applications owned by the target
#[tokio::test]
async fn moves_all_applications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, source, competition, _) =
        factory::helpers::create_applicant_with_application(db).await?;
    let second = factory::competition::create_competition(db, competition.university_id).await?;
    factory::application::create_application(db, source.id, second.id).await?;
    let (_, target) = factory::applicant::create_applicant(db).await?;

    let repo = ApplicationRepository::new(db);
    let moved = repo.reassign(source.id, target.id).await?;

    assert_eq!(moved, 2);

    let remaining = repo
        .get_filtered(ApplicationFilter {
            applicant_id: Some(source.id),
            ..Default::default()
        })
        .await?;
    assert!(remaining.is_empty());

    let owned = repo
        .get_filtered(ApplicationFilter {
            applicant_id: Some(target.id),
            ..Default::default()
        })
        .await?;
    assert_eq!(owned.len(), 2);

    Ok(())
}

/// Tests reassigning from an applicant without applications.
///
/// Expected: zero rows moved
#[tokio::test]
async fn moves_nothing_without_applications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, source) = factory::applicant::create_applicant(db).await?;
    let (_, target) = factory::applicant::create_applicant(db).await?;

    let moved = ApplicationRepository::new(db)
        .reassign(source.id, target.id)
        .await?;

    assert_eq!(moved, 0);

    Ok(())
}
