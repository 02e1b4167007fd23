use super::*;
use entity::sea_orm_active_enums::PersonType;

/// Tests filtering users by role and status within a university.
///
/// Expected: only the active teacher of the requested university
#[tokio::test]
async fn filters_by_role_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let other = factory::university::create_university(db).await?;

    let (_, teacher) = factory::user::create_teacher(db, university.id).await?;
    factory::user::create_user(db, university.id).await?;
    factory::user::create_teacher(db, other.id).await?;

    let person = factory::person::create_person(db, PersonType::Staff).await?;
    factory::user::UserFactory::new(db, person.id, university.id)
        .role(UserRole::Teacher)
        .status(UserStatus::Inactive)
        .build()
        .await?;

    let users = UserRepository::new(db)
        .get_filtered(UserFilter {
            university_id: Some(university.id),
            role: Some(UserRole::Teacher),
            status: Some(UserStatus::Active),
        })
        .await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].user.id, teacher.id);
    assert!(users[0].person.is_some());
    assert_eq!(
        users[0].university.as_ref().map(|u| u.id),
        Some(university.id)
    );

    Ok(())
}

/// Tests the ordering of an unfiltered listing.
///
/// Expected: users ordered by last name regardless of creation order
#[tokio::test]
async fn orders_by_last_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;

    let mut created = Vec::new();
    for last_name in ["Sy", "Faye", "Mbaye"] {
        let person = factory::person::PersonFactory::new(db)
            .person_type(PersonType::Staff)
            .last_name(last_name)
            .build()
            .await?;
        let user = factory::user::UserFactory::new(db, person.id, university.id)
            .build()
            .await?;
        created.push(user);
    }

    let users = UserRepository::new(db)
        .get_filtered(UserFilter::default())
        .await?;

    let ids: Vec<i32> = users.iter().map(|u| u.user.id).collect();
    assert_eq!(ids, vec![created[1].id, created[2].id, created[0].id]);

    Ok(())
}
