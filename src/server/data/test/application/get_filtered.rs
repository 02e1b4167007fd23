use super::*;
use chrono::{Duration, Utc};

/// Tests listing by competition and status.
///
/// Expected: matching applications, most recent first, competition attached
#[tokio::test]
async fn filters_and_orders_by_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let competition = factory::competition::create_competition(db, university.id).await?;
    let other = factory::competition::create_competition(db, university.id).await?;

    let (_, first) = factory::applicant::create_applicant(db).await?;
    let (_, second) = factory::applicant::create_applicant(db).await?;
    let (_, third) = factory::applicant::create_applicant(db).await?;

    let older = factory::application::ApplicationFactory::new(db, first.id, competition.id)
        .application_date(Utc::now() - Duration::days(3))
        .build()
        .await?;
    let newer = factory::application::ApplicationFactory::new(db, second.id, competition.id)
        .application_date(Utc::now() - Duration::days(1))
        .build()
        .await?;
    factory::application::ApplicationFactory::new(db, third.id, competition.id)
        .status(ApplicationStatus::Selected)
        .build()
        .await?;
    factory::application::create_application(db, first.id, other.id).await?;

    let applications = ApplicationRepository::new(db)
        .get_filtered(ApplicationFilter {
            competition_id: Some(competition.id),
            status: Some(ApplicationStatus::Pending),
            ..Default::default()
        })
        .await?;

    assert_eq!(applications.len(), 2);
    assert_eq!(applications[0].application.id, newer.id);
    assert_eq!(applications[1].application.id, older.id);
    assert_eq!(
        applications[0]
            .competition
            .as_ref()
            .map(|c| c.competition.id),
        Some(competition.id)
    );

    Ok(())
}
