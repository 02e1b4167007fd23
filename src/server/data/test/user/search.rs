use super::*;

/// Tests searching by employee ID and by work email.
///
/// Expected: the owning user for each term
#[tokio::test]
async fn matches_employee_id_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let person = factory::person::PersonFactory::new(db).build().await?;
    let user = factory::user::UserFactory::new(db, person.id, university.id)
        .employee_id("PERS-7731")
        .email("registrar@ucad.sn")
        .build()
        .await?;
    factory::user::create_user(db, university.id).await?;

    let repo = UserRepository::new(db);

    let by_employee_id = repo.search("7731").await?;
    assert_eq!(by_employee_id.len(), 1);
    assert_eq!(by_employee_id[0].user.id, user.id);

    let by_email = repo.search("registrar").await?;
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].user.id, user.id);

    Ok(())
}

/// Tests searching by the person's last name.
///
/// Expected: results ordered by last name
#[tokio::test]
async fn orders_by_last_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;

    let person = factory::person::PersonFactory::new(db)
        .last_name("Mbaye")
        .build()
        .await?;
    let mbaye = factory::user::UserFactory::new(db, person.id, university.id)
        .build()
        .await?;

    let person = factory::person::PersonFactory::new(db)
        .last_name("Ba")
        .build()
        .await?;
    let ba = factory::user::UserFactory::new(db, person.id, university.id)
        .build()
        .await?;

    let results = UserRepository::new(db).search("Ba").await?;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].user.id, ba.id);
    assert_eq!(results[1].user.id, mbaye.id);

    Ok(())
}
