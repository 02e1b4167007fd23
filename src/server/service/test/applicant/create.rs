use super::*;

/// Tests that the first applicant of the year gets sequence one.
///
/// Expected: code `APP-<year>-000001`
#[tokio::test]
async fn assigns_first_code_of_year() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let applicant = ApplicantService::new(db)
        .create(CreateApplicantParams {
            person: person_params(PersonType::Applicant, "Seynabou", "Diallo"),
        })
        .await?;

    assert_eq!(
        applicant.applicant.application_code,
        format!("APP-{}-000001", Utc::now().year())
    );
    assert!(applicant.applications.is_empty());

    Ok(())
}

/// Tests that the sequence continues from the latest code of the year.
///
/// Expected: the sequence after the newest existing code
#[tokio::test]
async fn continues_sequence_of_year() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let year = Utc::now().year();
    let person = factory::person::create_person(db, PersonType::Applicant).await?;
    factory::applicant::ApplicantFactory::new(db, person.id)
        .application_code(format!("APP-{}-000007", year))
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let applicant = ApplicantService::new(db)
        .create(CreateApplicantParams {
            person: person_params(PersonType::Applicant, "Seynabou", "Diallo"),
        })
        .await?;

    assert_eq!(
        applicant.applicant.application_code,
        format!("APP-{}-000008", year)
    );

    Ok(())
}

/// Tests that codes of a past year do not carry over.
///
/// Expected: the generator restarts at one for a new year
#[tokio::test]
async fn restarts_sequence_for_new_year() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::person::create_person(db, PersonType::Applicant).await?;
    factory::applicant::ApplicantFactory::new(db, person.id)
        .application_code("APP-2030-000041")
        .build()
        .await?;

    let generator = ApplicationCodeGenerator::new(db);

    assert_eq!(generator.generate_for_year(2030).await?, "APP-2030-000042");
    assert_eq!(generator.generate_for_year(2031).await?, "APP-2031-000001");

    Ok(())
}

/// Tests changing the code to one held by another applicant.
///
/// Expected: Err(Duplicate)
#[tokio::test]
async fn update_rejects_taken_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = factory::applicant::create_applicant(db).await?;
    let (_, second) = factory::applicant::create_applicant(db).await?;

    let result = ApplicantService::new(db)
        .update(second.id, Some(first.application_code.clone()))
        .await;

    assert!(matches!(result, Err(AppError::Duplicate(_))));

    Ok(())
}

/// Tests creating an applicant whose national ID is already on file.
///
/// Expected: Err(Duplicate) and no person or applicant row is left behind
#[tokio::test]
async fn duplicate_national_id_creates_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::person::create_person(db, PersonType::Applicant).await?;

    let mut person = person_params(PersonType::Applicant, "Seynabou", "Diallo");
    person.national_id = existing.national_id.clone();

    let result = ApplicantService::new(db)
        .create(CreateApplicantParams { person })
        .await;

    assert!(matches!(result, Err(AppError::Duplicate(_))));
    assert_eq!(entity::prelude::Person::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Applicant::find().count(db).await?, 0);

    Ok(())
}
