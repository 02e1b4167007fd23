use super::*;
use entity::sea_orm_active_enums::PersonType;

/// Tests listing the students with a status.
///
/// Expected: only students with that status, ordered by last name
#[tokio::test]
async fn orders_matching_students_by_last_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;

    let mut created = Vec::new();
    for (last_name, status) in [
        ("Sow", StudentStatus::Graduated),
        ("Ba", StudentStatus::Graduated),
        ("Diop", StudentStatus::Active),
        ("Ndiaye", StudentStatus::Graduated),
    ] {
        let person = factory::person::PersonFactory::new(db)
            .person_type(PersonType::Student)
            .last_name(last_name)
            .build()
            .await?;
        let student = factory::student::StudentFactory::new(db, person.id, university.id)
            .status(status)
            .build()
            .await?;
        created.push(student);
    }

    let repo = StudentRepository::new(db);

    let students = repo.get_by_status(StudentStatus::Graduated, None).await?;
    let ids: Vec<i32> = students.iter().map(|s| s.student.id).collect();
    assert_eq!(ids, vec![created[1].id, created[3].id, created[0].id]);

    let scoped = repo
        .get_by_status(StudentStatus::Graduated, Some(university.id + 100))
        .await?;
    assert!(scoped.is_empty());

    Ok(())
}
