use entity::sea_orm_active_enums::CompetitionStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::competition::{
    CompetitionFilter, CompetitionWithUniversity, CreateCompetitionParams,
    UpdateCompetitionParams,
};

pub struct CompetitionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompetitionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets competitions matching every supplied filter, latest closing date first
    pub async fn get_filtered(
        &self,
        filter: CompetitionFilter,
    ) -> Result<Vec<CompetitionWithUniversity>, DbErr> {
        let mut query = entity::prelude::Competition::find();

        if let Some(university_id) = filter.university_id {
            query = query.filter(entity::competition::Column::UniversityId.eq(university_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::competition::Column::Status.eq(status));
        }
        if let Some(competition_type) = filter.competition_type {
            query = query.filter(entity::competition::Column::CompetitionType.eq(competition_type));
        }

        Ok(query
            .order_by_desc(entity::competition::Column::ClosingDate)
            .find_also_related(entity::prelude::University)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(competition, university)| CompetitionWithUniversity {
                competition,
                university,
            })
            .collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::competition::Model>, DbErr> {
        entity::prelude::Competition::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CompetitionWithUniversity>, DbErr> {
        Ok(entity::prelude::Competition::find_by_id(id)
            .find_also_related(entity::prelude::University)
            .one(self.db)
            .await?
            .map(|(competition, university)| CompetitionWithUniversity {
                competition,
                university,
            }))
    }

    /// Gets competitions with their universities keyed by competition ID
    pub async fn get_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, CompetitionWithUniversity>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::Competition::find()
            .filter(entity::competition::Column::Id.is_in(ids))
            .find_also_related(entity::prelude::University)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(competition, university)| {
                (
                    competition.id,
                    CompetitionWithUniversity {
                        competition,
                        university,
                    },
                )
            })
            .collect())
    }

    pub async fn create(
        &self,
        params: CreateCompetitionParams,
    ) -> Result<entity::competition::Model, DbErr> {
        entity::competition::ActiveModel {
            university_id: ActiveValue::Set(params.university_id),
            name: ActiveValue::Set(params.name),
            competition_type: ActiveValue::Set(params.competition_type),
            opening_date: ActiveValue::Set(params.opening_date),
            closing_date: ActiveValue::Set(params.closing_date),
            application_fee: ActiveValue::Set(params.application_fee),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(params.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateCompetitionParams,
    ) -> Result<Option<entity::competition::Model>, DbErr> {
        let Some(competition) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut am = competition.into_active_model();
        if let Some(name) = params.name {
            am.name = ActiveValue::Set(name);
        }
        if let Some(competition_type) = params.competition_type {
            am.competition_type = ActiveValue::Set(competition_type);
        }
        if let Some(opening_date) = params.opening_date {
            am.opening_date = ActiveValue::Set(opening_date);
        }
        if let Some(closing_date) = params.closing_date {
            am.closing_date = ActiveValue::Set(closing_date);
        }
        if params.application_fee.is_some() {
            am.application_fee = ActiveValue::Set(params.application_fee);
        }
        if params.description.is_some() {
            am.description = ActiveValue::Set(params.description);
        }

        Ok(Some(am.update(self.db).await?))
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: CompetitionStatus,
    ) -> Result<Option<entity::competition::Model>, DbErr> {
        let Some(competition) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut am = competition.into_active_model();
        am.status = ActiveValue::Set(status);

        Ok(Some(am.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Competition::delete_by_id(id)
            .exec(self.db)
            .await
    }

    pub async fn count_applications(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Application::find()
            .filter(entity::application::Column::CompetitionId.eq(id))
            .count(self.db)
            .await
    }
}
