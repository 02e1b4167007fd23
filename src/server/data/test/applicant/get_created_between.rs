use super::*;
use entity::sea_orm_active_enums::PersonType;

/// Tests the inclusive creation window.
///
/// Expected: applicants on both bounds, oldest first, outsiders excluded
#[tokio::test]
async fn includes_bounds_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_admission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 3, 31, 23, 59, 59).unwrap();

    let mut created = Vec::new();
    for created_at in [
        end,
        start,
        start - Duration::seconds(1),
        end + Duration::seconds(1),
    ] {
        let person = factory::person::create_person(db, PersonType::Applicant).await?;
        let applicant = factory::applicant::ApplicantFactory::new(db, person.id)
            .created_at(created_at)
            .build()
            .await?;
        created.push(applicant);
    }

    let applicants = ApplicantRepository::new(db)
        .get_created_between(start, end)
        .await?;

    assert_eq!(applicants.len(), 2);
    assert_eq!(applicants[0].applicant.id, created[1].id);
    assert_eq!(applicants[1].applicant.id, created[0].id);

    Ok(())
}
