use super::*;

/// Tests deleting an applicant without applications.
///
/// Expected: Ok and the person is removed too
#[tokio::test]
async fn deletes_applicant_and_person() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (person, applicant) = factory::applicant::create_applicant(db).await?;

    ApplicantService::new(db).delete(applicant.id).await?;

    assert!(entity::prelude::Person::find_by_id(person.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting an applicant with an application on file.
///
/// Expected: Err(Dependency)
#[tokio::test]
async fn refuses_applicant_with_applications() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, applicant, _, _) = factory::helpers::create_applicant_with_application(db).await?;

    let result = ApplicantService::new(db).delete(applicant.id).await;

    assert!(matches!(result, Err(AppError::Dependency(_))));

    Ok(())
}
