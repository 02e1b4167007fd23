use super::*;
use entity::sea_orm_active_enums::PersonType;

async fn create_named_student(
    db: &sea_orm::DatabaseConnection,
    university_id: i32,
    first_name: &str,
    last_name: &str,
    status: StudentStatus,
) -> Result<entity::student::Model, DbErr> {
    let person = factory::person::PersonFactory::new(db)
        .person_type(PersonType::Student)
        .first_name(first_name)
        .last_name(last_name)
        .build()
        .await?;

    factory::student::StudentFactory::new(db, person.id, university_id)
        .status(status)
        .build()
        .await
}

/// Tests listing a university's students.
///
/// Expected: only that university's students, ordered by last then first name
#[tokio::test]
async fn orders_by_last_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let other = factory::university::create_university(db).await?;

    let sow = create_named_student(db, university.id, "Awa", "Sow", StudentStatus::Active).await?;
    let ba_moussa =
        create_named_student(db, university.id, "Moussa", "Ba", StudentStatus::Active).await?;
    let ba_aida = create_named_student(db, university.id, "Aida", "Ba", StudentStatus::Active).await?;
    create_named_student(db, other.id, "Binta", "Diop", StudentStatus::Active).await?;

    let students = StudentRepository::new(db)
        .get_by_university(university.id, StudentFilter::default())
        .await?;

    let ids: Vec<i32> = students.iter().map(|s| s.student.id).collect();
    assert_eq!(ids, vec![ba_aida.id, ba_moussa.id, sow.id]);
    assert!(students.iter().all(|s| s.person.is_some()));

    Ok(())
}

/// Tests the status and admission type filters on a university listing.
///
/// Expected: only the matching students of that university
#[tokio::test]
async fn applies_status_and_admission_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;

    let suspended =
        create_named_student(db, university.id, "Awa", "Sow", StudentStatus::Suspended).await?;
    create_named_student(db, university.id, "Moussa", "Ba", StudentStatus::Active).await?;

    let person = factory::person::create_person(db, PersonType::Student).await?;
    factory::student::StudentFactory::new(db, person.id, university.id)
        .status(StudentStatus::Suspended)
        .admission_type(Some(AdmissionType::Transfer))
        .build()
        .await?;

    let students = StudentRepository::new(db)
        .get_by_university(
            university.id,
            StudentFilter {
                university_id: None,
                status: Some(StudentStatus::Suspended),
                admission_type: Some(AdmissionType::Regular),
            },
        )
        .await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].student.id, suspended.id);

    Ok(())
}

/// Tests listing a university that does not exist.
///
/// Expected: Ok with no students
#[tokio::test]
async fn unknown_university_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    factory::student::create_student(db, university.id).await?;

    let students = StudentRepository::new(db)
        .get_by_university(university.id + 100, StudentFilter::default())
        .await?;

    assert!(students.is_empty());

    Ok(())
}
