use super::*;

/// Tests searching by partial last name.
///
/// Expected: matches ordered by last name then first name
#[tokio::test]
async fn orders_by_last_then_first_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::person::PersonFactory::new(db)
        .first_name("Moussa")
        .last_name("Ndiaye")
        .build()
        .await?;
    factory::person::PersonFactory::new(db)
        .first_name("Awa")
        .last_name("Ndiaye")
        .build()
        .await?;
    factory::person::PersonFactory::new(db)
        .first_name("Fatou")
        .last_name("Diop")
        .build()
        .await?;

    let results = PersonRepository::new(db).search("Ndia", None).await?;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].first_name, "Awa");
    assert_eq!(results[1].first_name, "Moussa");

    Ok(())
}

/// Tests narrowing the search to one person type.
///
/// Expected: only persons of the requested type
#[tokio::test]
async fn filters_by_person_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::person::PersonFactory::new(db)
        .person_type(PersonType::Staff)
        .last_name("Sarr")
        .build()
        .await?;
    factory::person::PersonFactory::new(db)
        .person_type(PersonType::Student)
        .last_name("Sarr")
        .build()
        .await?;

    let results = PersonRepository::new(db)
        .search("Sarr", Some(PersonType::Staff))
        .await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, staff.id);

    Ok(())
}

/// Tests matching on the personal email.
///
/// Expected: the person owning the address
#[tokio::test]
async fn matches_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::person::PersonFactory::new(db)
        .personal_email(Some("cheikh.fall@example.sn".to_string()))
        .build()
        .await?;

    let results = PersonRepository::new(db).search("fall@", None).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, person.id);

    Ok(())
}
