use super::*;

/// Tests searching by application code fragment.
///
/// Expected: the applicant owning the code
#[tokio::test]
async fn matches_application_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::person::PersonFactory::new(db).build().await?;
    let applicant = factory::applicant::ApplicantFactory::new(db, person.id)
        .application_code("APP-2025-000042")
        .build()
        .await?;
    factory::applicant::create_applicant(db).await?;

    let results = ApplicantRepository::new(db).search("000042").await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].applicant.id, applicant.id);

    Ok(())
}

/// Tests searching by the person's first name.
///
/// Expected: the matching applicant with its person attached
#[tokio::test]
async fn matches_person_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::person::PersonFactory::new(db)
        .first_name("Ousmane")
        .build()
        .await?;
    let applicant = factory::applicant::ApplicantFactory::new(db, person.id)
        .build()
        .await?;

    let results = ApplicantRepository::new(db).search("Ousm").await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].applicant.id, applicant.id);
    assert_eq!(
        results[0].person.as_ref().map(|p| p.first_name.as_str()),
        Some("Ousmane")
    );

    Ok(())
}
