use super::*;

/// Tests that a user search term shorter than two characters is refused.
///
/// Expected: Err(Validation) for a single character, including after trimming
#[tokio::test]
async fn rejects_short_term() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);

    assert!(matches!(
        service.search("K").await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        service.search(" K ").await,
        Err(AppError::Validation(_))
    ));

    Ok(())
}

/// Tests a valid user search.
///
/// Expected: the matching user by last name
#[tokio::test]
async fn finds_user_by_last_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let created = UserService::new(db)
        .create(user_params(university.id, "EMP-501", "m.kane@univ.sn"))
        .await?;

    let found = UserService::new(db).search("Kane").await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].user.id, created.user.user.id);

    Ok(())
}
