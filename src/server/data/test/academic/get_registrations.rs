use super::*;

/// Tests the registration history ordering.
///
/// Expected: latest academic year first with specialization and program attached
#[tokio::test]
async fn orders_latest_year_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (university, _, student) = factory::helpers::create_student_with_dependencies(db).await?;
    let (specialization, _, _) =
        factory::helpers::create_course_with_dependencies(db, university.id).await?;

    let first = RegistrationFactory::new(db, student.id, specialization.id)
        .academic_year("2023-2024")
        .build()
        .await?;
    let second = RegistrationFactory::new(db, student.id, specialization.id)
        .academic_year("2024-2025")
        .study_level(2)
        .build()
        .await?;

    let registrations = AcademicRepository::new(db)
        .get_registrations(student.id)
        .await?;

    assert_eq!(registrations.len(), 2);
    assert_eq!(registrations[0].registration.id, second.id);
    assert_eq!(registrations[1].registration.id, first.id);
    assert_eq!(
        registrations[0].specialization.as_ref().map(|s| s.id),
        Some(specialization.id)
    );
    assert!(registrations[0].program.is_some());

    Ok(())
}

/// Tests looking up the registration of one academic year.
///
/// Expected: Some for the registered year, None otherwise
#[tokio::test]
async fn finds_registration_for_year() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (university, _, student) = factory::helpers::create_student_with_dependencies(db).await?;
    let (specialization, _, _) =
        factory::helpers::create_course_with_dependencies(db, university.id).await?;
    let registration =
        factory::registration::create_registration(db, student.id, specialization.id).await?;

    let repo = AcademicRepository::new(db);

    let current = repo
        .get_registration_for_year(
            student.id,
            &factory::registration::current_academic_year(),
        )
        .await?;
    assert_eq!(current.map(|r| r.registration.id), Some(registration.id));

    let missing = repo.get_registration_for_year(student.id, "1999-2000").await?;
    assert!(missing.is_none());

    Ok(())
}
