use super::*;

/// Tests loading every role of a person.
///
/// Expected: user and student rows with their university, no applicant
#[tokio::test]
async fn loads_user_and_student_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let (person, user) = factory::user::create_user(db, university.id).await?;
    let student = factory::student::StudentFactory::new(db, person.id, university.id)
        .build()
        .await?;

    let roles = PersonRepository::new(db).get_roles(person.clone()).await?;

    assert_eq!(roles.person.id, person.id);

    let (role_user, user_university) = roles.user.unwrap();
    assert_eq!(role_user.id, user.id);
    assert_eq!(user_university.unwrap().id, university.id);

    let (role_student, _) = roles.student.unwrap();
    assert_eq!(role_student.id, student.id);

    assert!(roles.applicant.is_none());

    Ok(())
}

/// Tests the applicant role with its application count.
///
/// Expected: applicant row with a count of one
#[tokio::test]
async fn counts_applications_of_applicant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (person, applicant, _, _) =
        factory::helpers::create_applicant_with_application(db).await?;

    let roles = PersonRepository::new(db).get_roles(person).await?;

    let (role_applicant, count) = roles.applicant.unwrap();
    assert_eq!(role_applicant.id, applicant.id);
    assert_eq!(count, 1);
    assert!(roles.user.is_none());
    assert!(roles.student.is_none());

    Ok(())
}
