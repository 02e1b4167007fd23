use super::*;

/// Tests listing a student's results across years.
///
/// Expected: latest academic year first, other students excluded, student attached
#[tokio::test]
async fn lists_latest_year_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (university, person, student) =
        factory::helpers::create_student_with_dependencies(db).await?;
    let (specialization, _, _) =
        factory::helpers::create_course_with_dependencies(db, university.id).await?;

    let current = RegistrationFactory::new(db, student.id, specialization.id)
        .academic_year("2024-2025")
        .study_level(2)
        .build()
        .await?;
    let previous = RegistrationFactory::new(db, student.id, specialization.id)
        .academic_year("2023-2024")
        .build()
        .await?;
    let classmate = enroll(db, university.id, specialization.id, "2024-2025").await?;

    let previous = factory::registration::create_annual_result(db, &previous).await?;
    let current = factory::registration::create_annual_result(db, &current).await?;
    factory::registration::create_annual_result(db, &classmate).await?;

    let results = AnnualResultRepository::new(db)
        .get_by_student(student.id)
        .await?;

    let ids: Vec<i32> = results.iter().map(|r| r.result.id).collect();
    assert_eq!(ids, vec![current.id, previous.id]);
    assert_eq!(
        results[0].person.as_ref().map(|p| p.last_name.clone()),
        Some(person.last_name)
    );
    assert_eq!(
        results[0]
            .registration
            .as_ref()
            .map(|r| r.registration.study_level),
        Some(2)
    );

    Ok(())
}
