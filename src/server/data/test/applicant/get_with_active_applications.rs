use super::*;
use entity::sea_orm_active_enums::{ApplicationStatus, CompetitionStatus};

/// Tests that only pending applications to open, unexpired competitions count.
///
/// Expected: the applicant with the active application, carrying only that application
#[tokio::test]
async fn keeps_only_active_applications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let open = factory::competition::create_competition(db, university.id).await?;
    let closed = factory::competition::CompetitionFactory::new(db, university.id)
        .status(CompetitionStatus::Closed)
        .build()
        .await?;

    let (_, active) = factory::applicant::create_applicant(db).await?;
    let pending =
        factory::application::create_application(db, active.id, open.id).await?;
    factory::application::create_application(db, active.id, closed.id).await?;

    let (_, rejected) = factory::applicant::create_applicant(db).await?;
    factory::application::ApplicationFactory::new(db, rejected.id, open.id)
        .status(ApplicationStatus::Rejected)
        .build()
        .await?;

    let applicants = ApplicantRepository::new(db)
        .get_with_active_applications(Utc::now())
        .await?;

    assert_eq!(applicants.len(), 1);
    assert_eq!(applicants[0].applicant.id, active.id);
    assert_eq!(applicants[0].applications.len(), 1);
    assert_eq!(applicants[0].applications[0].application.id, pending.id);

    Ok(())
}

/// Tests that an open competition past its closing date is excluded.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn excludes_expired_competitions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let expired = factory::competition::CompetitionFactory::new(db, university.id)
        .closing_date(Utc::now() - Duration::days(1))
        .build()
        .await?;

    let (_, applicant) = factory::applicant::create_applicant(db).await?;
    factory::application::create_application(db, applicant.id, expired.id).await?;

    let applicants = ApplicantRepository::new(db)
        .get_with_active_applications(Utc::now())
        .await?;

    assert!(applicants.is_empty());

    Ok(())
}
