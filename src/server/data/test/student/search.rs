use super::*;
use entity::sea_orm_active_enums::PersonType;

/// Tests searching by a fragment of the student number.
///
/// Expected: the matching student only
#[tokio::test]
async fn matches_student_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let person = factory::person::create_person(db, PersonType::Student).await?;
    let student = factory::student::StudentFactory::new(db, person.id, university.id)
        .student_number("2026XYZ001")
        .build()
        .await?;
    factory::student::create_student(db, university.id).await?;

    let results = StudentRepository::new(db).search("XYZ", None).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].student.id, student.id);

    Ok(())
}

/// Tests searching by the person's last name within one university.
///
/// Expected: only the namesake enrolled in the requested university
#[tokio::test]
async fn matches_last_name_within_university() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let other = factory::university::create_university(db).await?;

    let person = factory::person::PersonFactory::new(db)
        .last_name("Gueye")
        .build()
        .await?;
    let student = factory::student::StudentFactory::new(db, person.id, university.id)
        .build()
        .await?;

    let namesake = factory::person::PersonFactory::new(db)
        .last_name("Gueye")
        .build()
        .await?;
    factory::student::StudentFactory::new(db, namesake.id, other.id)
        .build()
        .await?;

    let results = StudentRepository::new(db)
        .search("Gueye", Some(university.id))
        .await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].student.id, student.id);

    Ok(())
}
