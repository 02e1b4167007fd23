use super::*;

/// Tests recomputing the ranking of two specializations in one year.
///
/// Expected: ties share a rank, each specialization starts at 1, a stale rank on an
/// ungraded result is cleared
#[tokio::test]
async fn ranks_each_cohort_with_ties() -> Result<(), AppError> {
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

    let mut ids = Vec::new();
    for average in [Some(14.0), Some(15.0), Some(14.0), None] {
        let registration = enroll(db, university.id, specialization.id).await?;
        let result = AnnualResultFactory::new(db, &registration)
            .annual_average(average)
            .ranking(Some(3))
            .build()
            .await?;
        ids.push(result.id);
    }
    let registration = enroll(db, university.id, other_specialization.id).await?;
    let other = AnnualResultFactory::new(db, &registration)
        .annual_average(Some(9.0))
        .build()
        .await?;

    let ranking = AnnualResultService::new(db)
        .update_ranking("2024-2025", None)
        .await?;

    let ranks: Vec<(i32, Option<i32>)> = ranking
        .iter()
        .map(|r| (r.result.id, r.result.ranking))
        .collect();
    assert_eq!(
        ranks,
        vec![
            (ids[1], Some(1)),
            (other.id, Some(1)),
            (ids[0], Some(2)),
            (ids[2], Some(2)),
            (ids[3], None),
        ]
    );

    Ok(())
}

/// Tests recomputing one specialization's ranking.
///
/// Expected: results of other specializations keep their rank
#[tokio::test]
async fn leaves_other_specializations_alone() -> Result<(), AppError> {
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

    let registration = enroll(db, university.id, specialization.id).await?;
    let ranked = factory::registration::create_annual_result(db, &registration).await?;
    let registration = enroll(db, university.id, other_specialization.id).await?;
    let untouched = AnnualResultFactory::new(db, &registration)
        .ranking(Some(7))
        .build()
        .await?;

    let ranking = AnnualResultService::new(db)
        .update_ranking("2024-2025", Some(specialization.id))
        .await?;

    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].result.id, ranked.id);
    assert_eq!(ranking[0].result.ranking, Some(1));

    let untouched = AnnualResultRepository::new(db)
        .find_by_id(untouched.id)
        .await?;
    assert_eq!(untouched.and_then(|r| r.ranking), Some(7));

    Ok(())
}

/// Tests a malformed academic year.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_malformed_year() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AnnualResultService::new(db)
        .update_ranking("2024", None)
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
