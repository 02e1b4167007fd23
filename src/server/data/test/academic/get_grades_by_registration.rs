use super::*;

/// Tests grouping grades under their registration.
///
/// Expected: each registration keyed with its grades and their courses
#[tokio::test]
async fn groups_grades_per_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (university, _, student) = factory::helpers::create_student_with_dependencies(db).await?;
    let (specialization, teaching_unit, course) =
        factory::helpers::create_course_with_dependencies(db, university.id).await?;
    let second_course = factory::academic::CourseFactory::new(db, teaching_unit.id)
        .build()
        .await?;

    let previous = RegistrationFactory::new(db, student.id, specialization.id)
        .academic_year("2023-2024")
        .build()
        .await?;
    let current =
        factory::registration::create_registration(db, student.id, specialization.id).await?;

    factory::registration::create_grade(db, student.id, course.id, previous.id).await?;
    factory::registration::create_grade(db, student.id, course.id, current.id).await?;
    factory::registration::create_grade(db, student.id, second_course.id, current.id).await?;

    let grades = AcademicRepository::new(db)
        .get_grades_by_registration(vec![previous.id, current.id])
        .await?;

    assert_eq!(grades[&previous.id].len(), 1);
    assert_eq!(grades[&current.id].len(), 2);
    assert_eq!(
        grades[&current.id][1]
            .course
            .as_ref()
            .map(|c| c.course.id),
        Some(second_course.id)
    );

    Ok(())
}

/// Tests the lookup with no registrations.
///
/// Expected: an empty map without querying grades
#[tokio::test]
async fn returns_empty_for_no_registrations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let grades = AcademicRepository::new(db)
        .get_grades_by_registration(Vec::new())
        .await?;

    assert!(grades.is_empty());

    Ok(())
}
