use super::*;

/// Tests transferring a student.
///
/// Expected: Ok with the new university and transferred status
#[tokio::test]
async fn transfers_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, student) = factory::helpers::create_student_with_dependencies(db).await?;
    let target = factory::university::create_university(db).await?;

    let transferred = StudentService::new(db)
        .transfer(student.id, target.id)
        .await?;

    assert_eq!(transferred.student.university_id, target.id);
    assert_eq!(transferred.student.status, StudentStatus::Transferred);
    assert_eq!(transferred.university.map(|u| u.id), Some(target.id));

    Ok(())
}

/// Tests transferring to a university that does not exist.
///
/// Expected: Err(NotFound) and the student unchanged
#[tokio::test]
async fn fails_for_missing_target() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (university, _, student) = factory::helpers::create_student_with_dependencies(db).await?;

    let service = StudentService::new(db);
    let result = service.transfer(student.id, 404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let unchanged = service.get_by_id(student.id).await?;
    assert_eq!(unchanged.student.student.university_id, university.id);
    assert_eq!(unchanged.student.student.status, StudentStatus::Active);

    Ok(())
}
