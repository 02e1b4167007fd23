use super::*;

/// Tests a search term shorter than two characters.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_short_term() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PersonService::new(db).search(" a ", None).await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that the term is trimmed before matching.
///
/// Expected: the matching person
#[tokio::test]
async fn trims_term() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::person::PersonFactory::new(db)
        .last_name("Thiam")
        .build()
        .await?;

    let results = PersonService::new(db).search("  Thiam ", None).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, person.id);

    Ok(())
}
