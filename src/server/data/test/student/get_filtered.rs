use super::*;
use chrono::NaiveDate;
use entity::sea_orm_active_enums::PersonType;

/// Tests listing without filters.
///
/// Expected: every student, latest admission first, with person and university attached
#[tokio::test]
async fn lists_latest_admission_first_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;

    let person = factory::person::create_person(db, PersonType::Student).await?;
    let recent = factory::student::StudentFactory::new(db, person.id, university.id)
        .admission_date(NaiveDate::from_ymd_opt(2024, 10, 1).unwrap())
        .build()
        .await?;

    // Created last but admitted earliest
    let person = factory::person::create_person(db, PersonType::Student).await?;
    let earlier = factory::student::StudentFactory::new(db, person.id, university.id)
        .admission_date(NaiveDate::from_ymd_opt(2022, 10, 1).unwrap())
        .build()
        .await?;

    let students = StudentRepository::new(db)
        .get_filtered(StudentFilter::default())
        .await?;

    assert_eq!(students.len(), 2);
    assert_eq!(students[0].student.id, recent.id);
    assert_eq!(students[1].student.id, earlier.id);
    assert!(students[0].person.is_some());
    assert_eq!(
        students[0].university.as_ref().map(|u| u.id),
        Some(university.id)
    );

    Ok(())
}

/// Tests combining the university, status and admission type filters.
///
/// Expected: only the student matching all three
#[tokio::test]
async fn applies_every_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let other = factory::university::create_university(db).await?;

    let person = factory::person::create_person(db, PersonType::Student).await?;
    let expected = factory::student::StudentFactory::new(db, person.id, university.id)
        .status(StudentStatus::Suspended)
        .admission_type(Some(AdmissionType::Transfer))
        .build()
        .await?;

    factory::student::create_student(db, university.id).await?;
    factory::student::create_student(db, other.id).await?;

    let students = StudentRepository::new(db)
        .get_filtered(StudentFilter {
            university_id: Some(university.id),
            status: Some(StudentStatus::Suspended),
            admission_type: Some(AdmissionType::Transfer),
        })
        .await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].student.id, expected.id);

    Ok(())
}
