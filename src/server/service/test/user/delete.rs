use super::*;

/// Tests deleting a user without courses.
///
/// Expected: Ok and the person is removed with the user
#[tokio::test]
async fn deletes_user_and_person() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let (person, user) = factory::user::create_user(db, university.id).await?;

    UserService::new(db).delete(user.id).await?;

    assert!(entity::prelude::Person::find_by_id(person.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a teacher with an assigned course.
///
/// Expected: Err(Dependency)
#[tokio::test]
async fn refuses_teacher_with_courses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let (_, teacher) = factory::user::create_teacher(db, university.id).await?;
    let (_, teaching_unit, _) =
        factory::helpers::create_course_with_dependencies(db, university.id).await?;
    factory::academic::CourseFactory::new(db, teaching_unit.id)
        .teacher_id(Some(teacher.id))
        .build()
        .await?;

    let result = UserService::new(db).delete(teacher.id).await;

    assert!(matches!(result, Err(AppError::Dependency(_))));

    Ok(())
}
