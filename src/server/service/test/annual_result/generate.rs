use super::*;
use entity::sea_orm_active_enums::GradeValidationStatus;
use test_utils::factory::{academic::CourseFactory, registration::GradeFactory};

/// Tests generating a result, then regenerating it after a retake.
///
/// Expected: created first, then overwritten in place with the new average and the
/// ranking kept
#[tokio::test]
async fn creates_then_recalculates_keeping_ranking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let (specialization, teaching_unit, _) =
        factory::helpers::create_course_with_dependencies(db, university.id).await?;
    let major = CourseFactory::new(db, teaching_unit.id)
        .coefficient(2.0)
        .build()
        .await?;
    let minor = CourseFactory::new(db, teaching_unit.id).build().await?;
    let registration = enroll(db, university.id, specialization.id).await?;
    let student_id = registration.student_id;

    GradeFactory::new(db, student_id, major.id, registration.id)
        .course_average(Some(16.0))
        .build()
        .await?;
    GradeFactory::new(db, student_id, minor.id, registration.id)
        .course_average(Some(10.0))
        .build()
        .await?;

    let service = AnnualResultService::new(db);

    let (first, created) = service.generate(registration.id).await?;
    assert!(created);
    assert_eq!(first.result.annual_average, Some(14.0));
    assert_eq!(first.result.credits_earned, 6);
    assert_eq!(first.result.board_decision, Some(BoardDecision::Admitted));
    assert_eq!(first.result.honors, Some(Honors::Good));

    AnnualResultRepository::new(db)
        .set_ranking(first.result.id, Some(4))
        .await?;

    GradeFactory::new(db, student_id, minor.id, registration.id)
        .course_average(Some(12.0))
        .session(2)
        .validation_status(GradeValidationStatus::Validated)
        .build()
        .await?;

    let (second, created) = service.generate(registration.id).await?;
    assert!(!created);
    assert_eq!(second.result.id, first.result.id);
    assert_eq!(second.result.annual_average, Some(14.67));
    assert_eq!(second.result.ranking, Some(4));

    Ok(())
}

/// Tests calculating without storing.
///
/// Expected: the computed outcome, no annual result written
#[tokio::test]
async fn calculate_does_not_store() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::university::create_university(db).await?;
    let (specialization, _, course) =
        factory::helpers::create_course_with_dependencies(db, university.id).await?;
    let registration = enroll(db, university.id, specialization.id).await?;
    GradeFactory::new(db, registration.student_id, course.id, registration.id)
        .course_average(Some(7.5))
        .validation_status(GradeValidationStatus::NotValidated)
        .build()
        .await?;

    let calculated = AnnualResultService::new(db)
        .calculate(registration.id)
        .await?;

    assert_eq!(calculated.annual_average, Some(7.5));
    assert_eq!(calculated.credits_earned, 0);
    assert_eq!(calculated.board_decision, Some(BoardDecision::Repeat));
    assert!(AnnualResultRepository::new(db)
        .find_by_registration(registration.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests generating for a registration that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_registration_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AnnualResultService::new(db).generate(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
