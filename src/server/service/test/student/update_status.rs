use super::*;

/// Tests changing the status of a student.
///
/// Expected: the returned and stored status is the new one
#[tokio::test]
async fn updates_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, student) = factory::helpers::create_student_with_dependencies(db).await?;

    let updated = StudentService::new(db)
        .update_status(student.id, StudentStatus::Suspended)
        .await?;

    assert_eq!(updated.student.status, StudentStatus::Suspended);

    let stored = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, StudentStatus::Suspended);

    Ok(())
}

/// Tests changing the status of a student that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_student_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentService::new(db)
        .update_status(42, StudentStatus::Expelled)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
