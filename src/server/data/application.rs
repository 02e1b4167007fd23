use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    data::competition::CompetitionRepository,
    model::application::{ApplicationFilter, ApplicationWithCompetition, CreateApplicationParams},
};

pub struct ApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets applications matching every supplied filter, most recent first
    pub async fn get_filtered(
        &self,
        filter: ApplicationFilter,
    ) -> Result<Vec<ApplicationWithCompetition>, DbErr> {
        let mut query = entity::prelude::Application::find();

        if let Some(applicant_id) = filter.applicant_id {
            query = query.filter(entity::application::Column::ApplicantId.eq(applicant_id));
        }
        if let Some(competition_id) = filter.competition_id {
            query = query.filter(entity::application::Column::CompetitionId.eq(competition_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::application::Column::Status.eq(status));
        }

        let applications = query
            .order_by_desc(entity::application::Column::ApplicationDate)
            .order_by_desc(entity::application::Column::Id)
            .all(self.db)
            .await?;

        self.with_competitions(applications).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::application::Model>, DbErr> {
        entity::prelude::Application::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ApplicationWithCompetition>, DbErr> {
        let application = self.find_by_id(id).await?;

        Ok(self
            .with_competitions(application.into_iter().collect())
            .await?
            .pop())
    }

    /// Gets the applications of each applicant keyed by applicant ID
    pub async fn get_by_applicant_ids(
        &self,
        applicant_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<ApplicationWithCompetition>>, DbErr> {
        if applicant_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let applications = entity::prelude::Application::find()
            .filter(entity::application::Column::ApplicantId.is_in(applicant_ids))
            .order_by_desc(entity::application::Column::ApplicationDate)
            .order_by_desc(entity::application::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<ApplicationWithCompetition>> = HashMap::new();
        for application in self.with_competitions(applications).await? {
            grouped
                .entry(application.application.applicant_id)
                .or_default()
                .push(application);
        }

        Ok(grouped)
    }

    pub async fn create(
        &self,
        params: CreateApplicationParams,
    ) -> Result<entity::application::Model, DbErr> {
        entity::application::ActiveModel {
            applicant_id: ActiveValue::Set(params.applicant_id),
            competition_id: ActiveValue::Set(params.competition_id),
            application_date: ActiveValue::Set(chrono::Utc::now()),
            status: ActiveValue::Set(ApplicationStatus::Pending),
            file: ActiveValue::Set(params.file),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: ApplicationStatus,
    ) -> Result<Option<entity::application::Model>, DbErr> {
        let Some(application) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut am = application.into_active_model();
        am.status = ActiveValue::Set(status);

        Ok(Some(am.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Application::delete_by_id(id)
            .exec(self.db)
            .await
    }

    /// Moves every application of `source_applicant_id` to `target_applicant_id`
    ///
    /// Returns the number of applications moved.
    pub async fn reassign(
        &self,
        source_applicant_id: i32,
        target_applicant_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Application::update_many()
            .col_expr(
                entity::application::Column::ApplicantId,
                Expr::value(target_applicant_id),
            )
            .filter(entity::application::Column::ApplicantId.eq(source_applicant_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Attaches each application's competition
    async fn with_competitions(
        &self,
        applications: Vec<entity::application::Model>,
    ) -> Result<Vec<ApplicationWithCompetition>, DbErr> {
        let competition_ids: Vec<i32> = applications.iter().map(|a| a.competition_id).collect();
        let competitions = CompetitionRepository::new(self.db)
            .get_by_ids(competition_ids)
            .await?;

        Ok(applications
            .into_iter()
            .map(|application| {
                let competition = competitions.get(&application.competition_id).cloned();
                ApplicationWithCompetition {
                    application,
                    competition,
                }
            })
            .collect())
    }
}
