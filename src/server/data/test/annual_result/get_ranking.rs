use super::*;

/// Tests the ranking order of a year.
///
/// Expected: ranked results by rank, then unranked results, other years excluded
#[tokio::test]
async fn orders_ranked_before_unranked() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let (specialization, _, _) =
        factory::helpers::create_course_with_dependencies(db, university.id).await?;

    let unranked = enroll(db, university.id, specialization.id, "2024-2025").await?;
    let second = enroll(db, university.id, specialization.id, "2024-2025").await?;
    let first = enroll(db, university.id, specialization.id, "2024-2025").await?;
    let other_year = enroll(db, university.id, specialization.id, "2023-2024").await?;

    let unranked = AnnualResultFactory::new(db, &unranked)
        .annual_average(Some(16.0))
        .build()
        .await?;
    let second = AnnualResultFactory::new(db, &second)
        .ranking(Some(2))
        .build()
        .await?;
    let first = AnnualResultFactory::new(db, &first)
        .ranking(Some(1))
        .build()
        .await?;
    AnnualResultFactory::new(db, &other_year)
        .ranking(Some(1))
        .build()
        .await?;

    let ranking = AnnualResultRepository::new(db)
        .get_ranking("2024-2025", None)
        .await?;

    let ids: Vec<i32> = ranking.iter().map(|r| r.result.id).collect();
    assert_eq!(ids, vec![first.id, second.id, unranked.id]);
    assert!(ranking.iter().all(|r| r.student.is_some()));

    Ok(())
}

/// Tests restricting the ranking to one specialization.
///
/// Expected: only results registered under that specialization
#[tokio::test]
async fn limits_to_specialization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let (specialization, _, _) =
        factory::helpers::create_course_with_dependencies(db, university.id).await?;
    let (other_specialization, _, _) =
        factory::helpers::create_course_with_dependencies(db, university.id).await?;

    let kept = enroll(db, university.id, specialization.id, "2024-2025").await?;
    let excluded = enroll(db, university.id, other_specialization.id, "2024-2025").await?;

    let kept = factory::registration::create_annual_result(db, &kept).await?;
    factory::registration::create_annual_result(db, &excluded).await?;

    let ranking = AnnualResultRepository::new(db)
        .get_ranking("2024-2025", Some(specialization.id))
        .await?;

    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].result.id, kept.id);

    Ok(())
}
