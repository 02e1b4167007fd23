use super::*;

/// Tests listing after a delete.
///
/// Expected: the remaining student only
#[tokio::test]
async fn listing_excludes_deleted_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (university, _, deleted) = factory::helpers::create_student_with_dependencies(db).await?;
    let (_, kept) = factory::student::create_student(db, university.id).await?;

    let service = StudentService::new(db);
    service.delete(deleted.id).await?;

    let students = service.get_filtered(StudentFilter::default()).await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].student.id, kept.id);

    Ok(())
}
