use entity::sea_orm_active_enums::{StudentStatus, UniversityStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::university::{
    CreateUniversityParams, UniversityStats, UpdateUniversityParams,
};

pub struct UniversityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UniversityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all universities ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::university::Model>, DbErr> {
        entity::prelude::University::find()
            .order_by_asc(entity::university::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::university::Model>, DbErr> {
        entity::prelude::University::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets universities for a set of IDs keyed by ID
    pub async fn find_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, entity::university::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::University::find()
            .filter(entity::university::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect())
    }

    /// Checks whether another university already uses `code`
    pub async fn code_taken(&self, code: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::University::find()
            .filter(entity::university::Column::Code.eq(code));

        if let Some(id) = exclude_id {
            query = query.filter(entity::university::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(
        &self,
        params: CreateUniversityParams,
    ) -> Result<entity::university::Model, DbErr> {
        entity::university::ActiveModel {
            code: ActiveValue::Set(params.code),
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            city: ActiveValue::Set(params.city),
            phone: ActiveValue::Set(params.phone),
            email: ActiveValue::Set(params.email),
            establishment_date: ActiveValue::Set(params.establishment_date),
            status: ActiveValue::Set(params.status),
            registration_date: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates the supplied fields of a university
    ///
    /// Returns `None` if the university doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: UpdateUniversityParams,
    ) -> Result<Option<entity::university::Model>, DbErr> {
        let Some(university) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut am = university.into_active_model();
        if let Some(code) = params.code {
            am.code = ActiveValue::Set(code);
        }
        if let Some(name) = params.name {
            am.name = ActiveValue::Set(name);
        }
        if params.address.is_some() {
            am.address = ActiveValue::Set(params.address);
        }
        if params.city.is_some() {
            am.city = ActiveValue::Set(params.city);
        }
        if params.phone.is_some() {
            am.phone = ActiveValue::Set(params.phone);
        }
        if params.email.is_some() {
            am.email = ActiveValue::Set(params.email);
        }
        if params.establishment_date.is_some() {
            am.establishment_date = ActiveValue::Set(params.establishment_date);
        }

        Ok(Some(am.update(self.db).await?))
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: UniversityStatus,
    ) -> Result<Option<entity::university::Model>, DbErr> {
        let Some(university) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut am = university.into_active_model();
        am.status = ActiveValue::Set(status);

        Ok(Some(am.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::University::delete_by_id(id)
            .exec(self.db)
            .await
    }

    /// Computes headcounts for one university
    pub async fn get_stats(&self, id: i32) -> Result<UniversityStats, DbErr> {
        let total_students = entity::prelude::Student::find()
            .filter(entity::student::Column::UniversityId.eq(id))
            .count(self.db)
            .await?;

        let active_students = entity::prelude::Student::find()
            .filter(entity::student::Column::UniversityId.eq(id))
            .filter(entity::student::Column::Status.eq(StudentStatus::Active))
            .count(self.db)
            .await?;

        let total_users = entity::prelude::User::find()
            .filter(entity::user::Column::UniversityId.eq(id))
            .count(self.db)
            .await?;

        let total_programs = entity::prelude::Program::find()
            .filter(entity::program::Column::UniversityId.eq(id))
            .count(self.db)
            .await?;

        let total_competitions = entity::prelude::Competition::find()
            .filter(entity::competition::Column::UniversityId.eq(id))
            .count(self.db)
            .await?;

        let total_news = entity::prelude::News::find()
            .filter(entity::news::Column::UniversityId.eq(id))
            .count(self.db)
            .await?;

        Ok(UniversityStats {
            university_id: id,
            total_students,
            active_students,
            total_users,
            total_programs,
            total_competitions,
            total_news,
        })
    }

    /// Counts rows of every kind that reference the university
    pub async fn count_dependents(&self, id: i32) -> Result<u64, DbErr> {
        let stats = self.get_stats(id).await?;

        Ok(stats.total_students
            + stats.total_users
            + stats.total_programs
            + stats.total_competitions
            + stats.total_news)
    }
}
