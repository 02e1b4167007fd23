use super::*;

/// Tests the statistics of a year with graded, failed and pending results.
///
/// Expected: aggregates over graded results only, every decision and honors key reported
#[tokio::test]
async fn summarizes_year() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let (specialization, _, _) =
        factory::helpers::create_course_with_dependencies(db, university.id).await?;

    let admitted = enroll(db, university.id, specialization.id, "2024-2025").await?;
    let repeating = enroll(db, university.id, specialization.id, "2024-2025").await?;
    let pending = enroll(db, university.id, specialization.id, "2024-2025").await?;
    let other_year = enroll(db, university.id, specialization.id, "2023-2024").await?;

    AnnualResultFactory::new(db, &admitted)
        .annual_average(Some(15.0))
        .honors(Some(Honors::Good))
        .build()
        .await?;
    AnnualResultFactory::new(db, &repeating)
        .annual_average(Some(8.0))
        .board_decision(Some(BoardDecision::Repeat))
        .build()
        .await?;
    AnnualResultFactory::new(db, &pending)
        .annual_average(None)
        .board_decision(None)
        .build()
        .await?;
    AnnualResultFactory::new(db, &other_year)
        .annual_average(Some(19.0))
        .build()
        .await?;

    let stats = AnnualResultRepository::new(db)
        .get_stats("2024-2025")
        .await?;

    assert_eq!(stats.total_results, 3);
    assert_eq!(stats.graded_results, 2);
    assert_eq!(stats.average, Some(11.5));
    assert_eq!(stats.highest, Some(15.0));
    assert_eq!(stats.lowest, Some(8.0));

    assert_eq!(stats.decision_stats["Admitted"], 1);
    assert_eq!(stats.decision_stats["Repeat"], 1);
    assert_eq!(stats.decision_stats["Excluded"], 0);
    assert_eq!(stats.decision_stats[PENDING_DECISION], 1);

    assert_eq!(stats.honors_stats["Good"], 1);
    assert_eq!(stats.honors_stats["Excellent"], 0);
    assert_eq!(stats.honors_stats[NO_HONORS], 2);

    Ok(())
}

/// Tests the statistics of a year without results.
///
/// Expected: zero counts and no aggregates
#[tokio::test]
async fn empty_year_reports_zeros() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = AnnualResultRepository::new(db)
        .get_stats("2024-2025")
        .await?;

    assert_eq!(stats.total_results, 0);
    assert_eq!(stats.average, None);
    assert_eq!(stats.decision_stats[PENDING_DECISION], 0);
    assert_eq!(stats.admission_rate(), 0.0);

    Ok(())
}
