use super::*;

/// Tests updating a person with their own national ID.
///
/// Expected: Ok with the other fields changed
#[tokio::test]
async fn keeps_own_national_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::person::PersonFactory::new(db)
        .national_id(Some("2880101000001".to_string()))
        .build()
        .await?;

    let updated = PersonService::new(db)
        .update(
            person.id,
            UpdatePersonParams {
                national_id: Some("2880101000001".to_string()),
                first_name: Some("Khady".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.person.first_name, "Khady");
    assert_eq!(updated.person.last_name, person.last_name);

    Ok(())
}

/// Tests updating a person that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_person() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PersonService::new(db)
        .update(31, UpdatePersonParams::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
