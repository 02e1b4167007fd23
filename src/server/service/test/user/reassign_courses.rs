use super::*;

/// Tests reassigning courses between two teachers.
///
/// Expected: Ok with the number of courses moved
#[tokio::test]
async fn moves_courses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let (_, source) = factory::user::create_teacher(db, university.id).await?;
    let (_, target) = factory::user::create_teacher(db, university.id).await?;
    let (_, teaching_unit, _) =
        factory::helpers::create_course_with_dependencies(db, university.id).await?;
    factory::academic::CourseFactory::new(db, teaching_unit.id)
        .teacher_id(Some(source.id))
        .build()
        .await?;

    let service = UserService::new(db);
    let moved = service.reassign_courses(source.id, target.id).await?;

    assert_eq!(moved, 1);
    assert_eq!(service.get_by_id(target.id).await?.courses.len(), 1);

    Ok(())
}

/// Tests reassigning to the same user.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_same_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let (_, teacher) = factory::user::create_teacher(db, university.id).await?;

    let result = UserService::new(db)
        .reassign_courses(teacher.id, teacher.id)
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests reassigning to a user that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_target() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let (_, teacher) = factory::user::create_teacher(db, university.id).await?;

    let result = UserService::new(db)
        .reassign_courses(teacher.id, teacher.id + 50)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
