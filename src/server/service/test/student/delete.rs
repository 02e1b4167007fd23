use super::*;

/// Tests deleting a student without academic records.
///
/// Expected: Ok and both the student and its person are removed
#[tokio::test]
async fn deletes_student_and_person() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, person, student) = factory::helpers::create_student_with_dependencies(db).await?;

    StudentService::new(db).delete(student.id).await?;

    assert!(entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Person::find_by_id(person.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a student holding a card.
///
/// Expected: Err(Dependency) and the student is kept
#[tokio::test]
async fn refuses_student_with_card() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, student) = factory::helpers::create_student_with_dependencies(db).await?;
    factory::student_card::create_student_card(db, student.id).await?;

    let result = StudentService::new(db).delete(student.id).await;

    assert!(matches!(result, Err(AppError::Dependency(_))));
    assert!(entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
