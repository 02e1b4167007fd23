//! News factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{NewsStatus, NewsType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a published information article for the university.
pub async fn create_news(
    db: &DatabaseConnection,
    university_id: i32,
) -> Result<entity::news::Model, DbErr> {
    let id = next_id();
    entity::news::ActiveModel {
        university_id: ActiveValue::Set(university_id),
        title: ActiveValue::Set(format!("News {}", id)),
        content: ActiveValue::Set("Campus announcement".to_string()),
        publication_date: ActiveValue::Set(Utc::now()),
        news_type: ActiveValue::Set(NewsType::Information),
        status: ActiveValue::Set(NewsStatus::Published),
        ..Default::default()
    }
    .insert(db)
    .await
}
