use super::*;
use entity::sea_orm_active_enums::PersonType;

/// Tests the application counts per applicant.
///
/// Expected: one applicant with two applications, one with none
#[tokio::test]
async fn counts_applicants_by_application_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, applicant, _, _) = factory::helpers::create_applicant_with_application(db).await?;
    let university = factory::university::create_university(db).await?;
    let competition = factory::competition::create_competition(db, university.id).await?;
    factory::application::create_application(db, applicant.id, competition.id).await?;
    factory::applicant::create_applicant(db).await?;

    let stats = ApplicantRepository::new(db).get_stats().await?;

    assert_eq!(stats.total_applicants, 2);
    assert_eq!(stats.applicants_with_applications, 1);
    assert_eq!(stats.applicants_with_multiple_applications, 1);
    assert_eq!(stats.applicants_without_applications, 1);

    Ok(())
}

/// Tests the monthly creation trend.
///
/// Expected: months keyed `YYYY-MM`, most recent first
#[tokio::test]
async fn groups_creation_by_month() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for created_at in [
        Utc.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2025, 2, 3, 8, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2025, 2, 20, 8, 0, 0).unwrap(),
    ] {
        let person = factory::person::create_person(db, PersonType::Applicant).await?;
        factory::applicant::ApplicantFactory::new(db, person.id)
            .created_at(created_at)
            .build()
            .await?;
    }

    let stats = ApplicantRepository::new(db).get_stats().await?;

    assert_eq!(
        stats.monthly_trend,
        vec![("2025-02".to_string(), 2), ("2025-01".to_string(), 1)]
    );

    Ok(())
}

/// Tests the trend window over more than a year of applicants.
///
/// Expected: only the twelve most recent months, the oldest two dropped
#[tokio::test]
async fn trend_keeps_twelve_recent_months() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for month in 1..=14u32 {
        let (year, month) = if month > 12 { (2025, month - 12) } else { (2024, month) };
        let person = factory::person::create_person(db, PersonType::Applicant).await?;
        factory::applicant::ApplicantFactory::new(db, person.id)
            .created_at(Utc.with_ymd_and_hms(year, month, 15, 8, 0, 0).unwrap())
            .build()
            .await?;
    }

    let stats = ApplicantRepository::new(db).get_stats().await?;

    assert_eq!(stats.monthly_trend.len(), 12);
    assert_eq!(stats.monthly_trend[0], ("2025-02".to_string(), 1));
    assert_eq!(stats.monthly_trend[11], ("2024-03".to_string(), 1));

    Ok(())
}
