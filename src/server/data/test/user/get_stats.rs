use super::*;
use entity::sea_orm_active_enums::PersonType;

/// Tests the role and status breakdowns.
///
/// Expected: every role and status keyed, zeros included
#[tokio::test]
async fn breaks_down_by_role_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let other = factory::university::create_university(db).await?;

    factory::user::create_teacher(db, university.id).await?;
    factory::user::create_user(db, other.id).await?;
    let person = factory::person::create_person(db, PersonType::Staff).await?;
    factory::user::UserFactory::new(db, person.id, university.id)
        .status(UserStatus::Inactive)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let stats = repo.get_stats(None).await?;
    assert_eq!(stats.total_users, 3);
    assert_eq!(stats.active_users, 2);
    assert_eq!(stats.role_stats.len(), 5);
    assert_eq!(stats.role_stats["teacher"], 1);
    assert_eq!(stats.role_stats["academic_agent"], 2);
    assert_eq!(stats.role_stats["super_admin"], 0);
    assert_eq!(stats.status_stats["inactive"], 1);

    let scoped = repo.get_stats(Some(university.id)).await?;
    assert_eq!(scoped.total_users, 2);
    assert_eq!(scoped.active_users, 1);

    Ok(())
}
