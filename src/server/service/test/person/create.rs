use super::*;

/// Tests creating a standalone person.
///
/// Expected: Ok with no roles attached
#[tokio::test]
async fn creates_person_without_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = PersonService::new(db)
        .create(person_params(PersonType::Staff, "Aminata", "Sow"))
        .await?;

    assert_eq!(person.person.first_name, "Aminata");
    assert!(person.user.is_none());
    assert!(person.student.is_none());
    assert!(person.applicant.is_none());

    Ok(())
}

/// Tests creating a person with a national ID already on file.
///
/// Expected: Err(Duplicate)
#[tokio::test]
async fn rejects_duplicate_national_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::person::PersonFactory::new(db)
        .national_id(Some("1750199912345".to_string()))
        .build()
        .await?;

    let mut params = person_params(PersonType::Staff, "Aminata", "Sow");
    params.national_id = Some("1750199912345".to_string());

    let result = PersonService::new(db).create(params).await;

    assert!(matches!(result, Err(AppError::Duplicate(_))));

    Ok(())
}

/// Tests creating a person with a personal email already on file.
///
/// Expected: Err(Duplicate)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::person::PersonFactory::new(db)
        .personal_email(Some("sow@example.com".to_string()))
        .build()
        .await?;

    let mut params = person_params(PersonType::Staff, "Aminata", "Sow");
    params.personal_email = Some("sow@example.com".to_string());

    let result = PersonService::new(db).create(params).await;

    assert!(matches!(result, Err(AppError::Duplicate(_))));

    Ok(())
}
