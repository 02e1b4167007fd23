use super::*;

/// Tests merging one applicant into another.
///
/// Expected: applications moved to the target, source applicant and person removed
#[tokio::test]
async fn moves_applications_and_removes_source() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (source_person, source, _, application) =
        factory::helpers::create_applicant_with_application(db).await?;
    let (_, target) = factory::applicant::create_applicant(db).await?;

    let merged = ApplicantService::new(db)
        .merge(MergeApplicantsParams {
            source_applicant_id: source.id,
            target_applicant_id: target.id,
        })
        .await?;

    assert_eq!(merged.applicant.id, target.id);
    assert_eq!(merged.applications.len(), 1);
    assert_eq!(merged.applications[0].application.id, application.id);

    assert!(entity::prelude::Applicant::find_by_id(source.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Person::find_by_id(source_person.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests merging into an applicant that does not exist.
///
/// Expected: Err(NotFound) and nothing changed
#[tokio::test]
async fn leaves_data_untouched_when_target_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, source, _, _) = factory::helpers::create_applicant_with_application(db).await?;

    let service = ApplicantService::new(db);
    let result = service
        .merge(MergeApplicantsParams {
            source_applicant_id: source.id,
            target_applicant_id: source.id + 100,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.get_by_id(source.id).await?.applications.len(), 1);

    Ok(())
}

/// Tests merging into a target that already has applications.
///
/// Expected: the target keeps its own applications and gains the source's
#[tokio::test]
async fn target_keeps_union_of_applications() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, source, competition, moved) =
        factory::helpers::create_applicant_with_application(db).await?;
    let (_, target) = factory::applicant::create_applicant(db).await?;
    let own =
        factory::application::create_application(db, target.id, competition.id).await?;

    let merged = ApplicantService::new(db)
        .merge(MergeApplicantsParams {
            source_applicant_id: source.id,
            target_applicant_id: target.id,
        })
        .await?;

    let mut ids: Vec<i32> = merged
        .applications
        .iter()
        .map(|a| a.application.id)
        .collect();
    ids.sort();
    let mut expected = vec![own.id, moved.id];
    expected.sort();

    assert_eq!(ids, expected);

    Ok(())
}
