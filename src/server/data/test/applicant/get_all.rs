use super::*;

/// Tests listing every applicant.
///
/// Expected: newest first with applications attached
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, with_application, _, _) =
        factory::helpers::create_applicant_with_application(db).await?;
    let (_, without_application) = factory::applicant::create_applicant(db).await?;

    let applicants = ApplicantRepository::new(db).get_all(None).await?;

    assert_eq!(applicants.len(), 2);
    assert_eq!(applicants[0].applicant.id, without_application.id);
    assert_eq!(applicants[1].applicant.id, with_application.id);
    assert_eq!(applicants[1].applications.len(), 1);
    assert!(applicants[1].person.is_some());

    Ok(())
}

/// Tests the `has_applications` filter both ways.
///
/// Expected: true keeps applicants with applications, false keeps the others
#[tokio::test]
async fn filters_on_having_applications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, with_application, _, _) =
        factory::helpers::create_applicant_with_application(db).await?;
    let (_, without_application) = factory::applicant::create_applicant(db).await?;

    let repo = ApplicantRepository::new(db);

    let with = repo.get_all(Some(true)).await?;
    assert_eq!(with.len(), 1);
    assert_eq!(with[0].applicant.id, with_application.id);

    let without = repo.get_all(Some(false)).await?;
    assert_eq!(without.len(), 1);
    assert_eq!(without[0].applicant.id, without_application.id);

    Ok(())
}
