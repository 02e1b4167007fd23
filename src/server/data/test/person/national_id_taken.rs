use super::*;

/// Tests the national ID collision check against another person.
///
/// Expected: true for another person, false for the owner
#[tokio::test]
async fn excludes_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::person::PersonFactory::new(db)
        .national_id(Some("1234567890123".to_string()))
        .build()
        .await?;

    let repo = PersonRepository::new(db);

    assert!(repo.national_id_taken("1234567890123", None).await?);
    assert!(!repo.national_id_taken("1234567890123", Some(person.id)).await?);
    assert!(!repo.national_id_taken("0000000000000", None).await?);

    Ok(())
}

/// Tests the personal email collision check.
///
/// Expected: true only while another person holds the address
#[tokio::test]
async fn detects_taken_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::person::PersonFactory::new(db)
        .personal_email(Some("awa@example.com".to_string()))
        .build()
        .await?;

    let repo = PersonRepository::new(db);

    assert!(repo.email_taken("awa@example.com", None).await?);
    assert!(!repo.email_taken("awa@example.com", Some(person.id)).await?);

    Ok(())
}
