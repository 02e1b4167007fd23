use super::*;

/// Tests a partial update.
///
/// Expected: supplied fields change, the others keep their value
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;

    let updated = UniversityRepository::new(db)
        .update(
            university.id,
            UpdateUniversityParams {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.code, university.code);
    assert_eq!(updated.city, university.city);

    Ok(())
}

/// Tests updating a university that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_university() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UniversityRepository::new(db)
        .update(42, UpdateUniversityParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests the status update.
///
/// Expected: status changed to inactive
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;

    let updated = UniversityRepository::new(db)
        .update_status(university.id, UniversityStatus::Inactive)
        .await?
        .unwrap();

    assert_eq!(updated.status, UniversityStatus::Inactive);

    Ok(())
}
