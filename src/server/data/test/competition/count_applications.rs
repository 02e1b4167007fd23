use super::*;

/// Tests counting the applications filed to a competition.
///
/// Expected: one for the used competition, zero for the other
#[tokio::test]
async fn counts_applications_per_competition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, competition, _) = factory::helpers::create_applicant_with_application(db).await?;
    let unused = factory::competition::create_competition(db, competition.university_id).await?;

    let repo = CompetitionRepository::new(db);

    assert_eq!(repo.count_applications(competition.id).await?, 1);
    assert_eq!(repo.count_applications(unused.id).await?, 0);

    Ok(())
}
