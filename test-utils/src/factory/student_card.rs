//! Student card factory.

use crate::factory::helpers::next_id;
use chrono::{Months, Utc};
use entity::sea_orm_active_enums::{CardRequestType, CardStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active card for the student, valid for one year from today.
pub async fn create_student_card(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::student_card::Model, DbErr> {
    let id = next_id();
    let today = Utc::now().date_naive();
    let expiration = today.checked_add_months(Months::new(12)).unwrap_or(today);

    entity::student_card::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        card_number: ActiveValue::Set(format!("CARD{}", id)),
        qr_code: ActiveValue::Set(None),
        issue_date: ActiveValue::Set(today),
        expiration_date: ActiveValue::Set(expiration),
        status: ActiveValue::Set(CardStatus::Active),
        request_date: ActiveValue::Set(Utc::now()),
        request_type: ActiveValue::Set(CardRequestType::Creation),
        ..Default::default()
    }
    .insert(db)
    .await
}
