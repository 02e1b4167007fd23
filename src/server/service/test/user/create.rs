use super::*;

/// Tests creating a staff user with its person.
///
/// Expected: Ok with an empty course list
#[tokio::test]
async fn creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;

    let user = UserService::new(db)
        .create(user_params(university.id, "EMP-900", "kane@ucad.sn"))
        .await?;

    assert_eq!(user.user.user.employee_id, "EMP-900");
    assert_eq!(user.user.user.role, UserRole::Teacher);
    assert!(user.courses.is_empty());

    Ok(())
}

/// Tests creating a user with a work email already in use.
///
/// Expected: Err(Duplicate) and no person created
#[tokio::test]
async fn duplicate_email_creates_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let person = factory::person::create_person(db, PersonType::Staff).await?;
    factory::user::UserFactory::new(db, person.id, university.id)
        .email("kane@ucad.sn")
        .build()
        .await?;

    let result = UserService::new(db)
        .create(user_params(university.id, "EMP-901", "kane@ucad.sn"))
        .await;

    assert!(matches!(result, Err(AppError::Duplicate(_))));
    assert_eq!(entity::prelude::Person::find().count(db).await?, 1);

    Ok(())
}

/// Tests moving a user to a university that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn update_rejects_unknown_university() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let (_, user) = factory::user::create_user(db, university.id).await?;

    let result = UserService::new(db)
        .update(
            user.id,
            UpdateUserParams {
                university_id: Some(university.id + 100),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
