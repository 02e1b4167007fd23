use super::*;

/// Tests counting the academic rows hanging off a student.
///
/// Expected: one registration, one grade and one card
#[tokio::test]
async fn counts_registrations_grades_and_cards() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (university, _, student) = factory::helpers::create_student_with_dependencies(db).await?;
    let (specialization, _, course) =
        factory::helpers::create_course_with_dependencies(db, university.id).await?;

    let registration =
        factory::registration::create_registration(db, student.id, specialization.id).await?;
    factory::registration::create_grade(db, student.id, course.id, registration.id).await?;
    factory::student_card::create_student_card(db, student.id).await?;

    let repo = StudentRepository::new(db);

    assert_eq!(repo.count_dependents(student.id).await?, 3);

    Ok(())
}

/// Tests a student without academic history.
///
/// Expected: zero
#[tokio::test]
async fn returns_zero_without_history() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, student) = factory::helpers::create_student_with_dependencies(db).await?;

    assert_eq!(
        StudentRepository::new(db)
            .count_dependents(student.id)
            .await?,
        0
    );

    Ok(())
}
