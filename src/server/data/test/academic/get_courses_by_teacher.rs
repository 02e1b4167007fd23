use super::*;

/// Tests grouping courses by teacher.
///
/// Expected: each teacher keyed with the courses they teach
#[tokio::test]
async fn groups_courses_per_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let (_, teacher) = factory::user::create_teacher(db, university.id).await?;
    let (_, idle) = factory::user::create_teacher(db, university.id).await?;
    let (_, teaching_unit, _) =
        factory::helpers::create_course_with_dependencies(db, university.id).await?;

    let course = factory::academic::CourseFactory::new(db, teaching_unit.id)
        .teacher_id(Some(teacher.id))
        .build()
        .await?;

    let courses = AcademicRepository::new(db)
        .get_courses_by_teacher(vec![teacher.id, idle.id])
        .await?;

    assert_eq!(courses[&teacher.id].len(), 1);
    assert_eq!(courses[&teacher.id][0].course.id, course.id);
    assert!(courses[&teacher.id][0].teaching_unit.is_some());
    assert!(!courses.contains_key(&idle.id));

    Ok(())
}
