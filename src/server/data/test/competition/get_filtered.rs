use super::*;
use chrono::{Duration, Utc};

/// Tests listing every competition.
///
/// Expected: latest closing date first, university attached
#[tokio::test]
async fn orders_by_closing_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let soon = factory::competition::CompetitionFactory::new(db, university.id)
        .closing_date(Utc::now() + Duration::days(5))
        .build()
        .await?;
    let later = factory::competition::CompetitionFactory::new(db, university.id)
        .closing_date(Utc::now() + Duration::days(60))
        .build()
        .await?;

    let competitions = CompetitionRepository::new(db)
        .get_filtered(CompetitionFilter::default())
        .await?;

    assert_eq!(competitions.len(), 2);
    assert_eq!(competitions[0].competition.id, later.id);
    assert_eq!(competitions[1].competition.id, soon.id);
    assert_eq!(
        competitions[0].university.as_ref().map(|u| u.id),
        Some(university.id)
    );

    Ok(())
}

/// Tests the status and type filters.
///
/// Expected: only the closed master competition
#[tokio::test]
async fn filters_by_status_and_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let expected = factory::competition::CompetitionFactory::new(db, university.id)
        .competition_type(CompetitionType::Master)
        .status(CompetitionStatus::Closed)
        .build()
        .await?;
    factory::competition::CompetitionFactory::new(db, university.id)
        .competition_type(CompetitionType::Master)
        .build()
        .await?;
    factory::competition::CompetitionFactory::new(db, university.id)
        .status(CompetitionStatus::Closed)
        .build()
        .await?;

    let competitions = CompetitionRepository::new(db)
        .get_filtered(CompetitionFilter {
            university_id: Some(university.id),
            status: Some(CompetitionStatus::Closed),
            competition_type: Some(CompetitionType::Master),
        })
        .await?;

    assert_eq!(competitions.len(), 1);
    assert_eq!(competitions[0].competition.id, expected.id);

    Ok(())
}
