use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ApplicationStatus, CompetitionStatus};
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::application::ApplicationRepository,
    model::applicant::{ApplicantStats, ApplicantWithRelations},
    util::search::SEARCH_RESULT_LIMIT,
};

/// Number of calendar months reported in the creation trend.
const TREND_MONTHS: u64 = 12;

pub struct ApplicantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicantRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all applicants, newest first
    ///
    /// With `has_applications` set, keeps only applicants that do (or do not) have at
    /// least one application.
    pub async fn get_all(
        &self,
        has_applications: Option<bool>,
    ) -> Result<Vec<ApplicantWithRelations>, DbErr> {
        let applicants = entity::prelude::Applicant::find()
            .order_by_desc(entity::applicant::Column::CreatedAt)
            .order_by_desc(entity::applicant::Column::Id)
            .find_also_related(entity::prelude::Person)
            .all(self.db)
            .await?;

        let mut applicants = self.with_applications(applicants).await?;

        if let Some(has_applications) = has_applications {
            applicants.retain(|a| a.applications.is_empty() != has_applications);
        }

        Ok(applicants)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::applicant::Model>, DbErr> {
        entity::prelude::Applicant::find_by_id(id).one(self.db).await
    }

    /// Gets an applicant with person and applications
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ApplicantWithRelations>, DbErr> {
        let applicant = entity::prelude::Applicant::find_by_id(id)
            .find_also_related(entity::prelude::Person)
            .one(self.db)
            .await?;

        Ok(self
            .with_applications(applicant.into_iter().collect())
            .await?
            .pop())
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Option<ApplicantWithRelations>, DbErr> {
        let applicant = entity::prelude::Applicant::find()
            .filter(entity::applicant::Column::ApplicationCode.eq(code))
            .find_also_related(entity::prelude::Person)
            .one(self.db)
            .await?;

        Ok(self
            .with_applications(applicant.into_iter().collect())
            .await?
            .pop())
    }

    pub async fn get_by_person_id(
        &self,
        person_id: i32,
    ) -> Result<Option<ApplicantWithRelations>, DbErr> {
        let applicant = entity::prelude::Applicant::find()
            .filter(entity::applicant::Column::PersonId.eq(person_id))
            .find_also_related(entity::prelude::Person)
            .one(self.db)
            .await?;

        Ok(self
            .with_applications(applicant.into_iter().collect())
            .await?
            .pop())
    }

    /// Checks whether another applicant already uses `code`
    pub async fn code_taken(&self, code: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Applicant::find()
            .filter(entity::applicant::Column::ApplicationCode.eq(code));

        if let Some(id) = exclude_id {
            query = query.filter(entity::applicant::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets the highest code starting with `prefix`
    ///
    /// Sequences are zero-padded to a fixed width, so the highest code is the last one
    /// issued even when an older applicant was given a regenerated code.
    pub async fn find_highest_code(&self, prefix: &str) -> Result<Option<String>, DbErr> {
        entity::prelude::Applicant::find()
            .select_only()
            .column(entity::applicant::Column::ApplicationCode)
            .filter(entity::applicant::Column::ApplicationCode.starts_with(prefix))
            .order_by_desc(entity::applicant::Column::ApplicationCode)
            .into_tuple::<String>()
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        person_id: i32,
        application_code: String,
    ) -> Result<entity::applicant::Model, DbErr> {
        entity::applicant::ActiveModel {
            person_id: ActiveValue::Set(person_id),
            application_code: ActiveValue::Set(application_code),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update_code(
        &self,
        id: i32,
        application_code: String,
    ) -> Result<Option<entity::applicant::Model>, DbErr> {
        let Some(applicant) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut am = applicant.into_active_model();
        am.application_code = ActiveValue::Set(application_code);

        Ok(Some(am.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Applicant::delete_by_id(id)
            .exec(self.db)
            .await
    }

    pub async fn count_applications(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Application::find()
            .filter(entity::application::Column::ApplicantId.eq(id))
            .count(self.db)
            .await
    }

    /// Searches applicants by name, national ID, personal email or application code
    ///
    /// Results are ordered newest first and capped at the search limit.
    pub async fn search(&self, term: &str) -> Result<Vec<ApplicantWithRelations>, DbErr> {
        let applicants = entity::prelude::Applicant::find()
            .find_also_related(entity::prelude::Person)
            .filter(
                Condition::any()
                    .add(entity::person::Column::FirstName.contains(term))
                    .add(entity::person::Column::LastName.contains(term))
                    .add(entity::person::Column::NationalId.contains(term))
                    .add(entity::person::Column::PersonalEmail.contains(term))
                    .add(entity::applicant::Column::ApplicationCode.contains(term)),
            )
            .order_by_desc(entity::applicant::Column::CreatedAt)
            .order_by_desc(entity::applicant::Column::Id)
            .limit(SEARCH_RESULT_LIMIT)
            .all(self.db)
            .await?;

        self.with_applications(applicants).await
    }

    /// Gets applicants with pending applications to open competitions that have not closed
    ///
    /// Only the active applications are attached to each applicant.
    pub async fn get_with_active_applications(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<ApplicantWithRelations>, DbErr> {
        let active_application_ids: Vec<i32> = entity::prelude::Application::find()
            .select_only()
            .column(entity::application::Column::Id)
            .inner_join(entity::prelude::Competition)
            .filter(entity::application::Column::Status.eq(ApplicationStatus::Pending))
            .filter(entity::competition::Column::Status.eq(CompetitionStatus::Open))
            .filter(entity::competition::Column::ClosingDate.gte(now))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        if active_application_ids.is_empty() {
            return Ok(Vec::new());
        }

        let applicant_ids: Vec<i32> = entity::prelude::Application::find()
            .select_only()
            .column(entity::application::Column::ApplicantId)
            .distinct()
            .filter(entity::application::Column::Id.is_in(active_application_ids.clone()))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        let applicants = entity::prelude::Applicant::find()
            .filter(entity::applicant::Column::Id.is_in(applicant_ids))
            .order_by_desc(entity::applicant::Column::CreatedAt)
            .order_by_desc(entity::applicant::Column::Id)
            .find_also_related(entity::prelude::Person)
            .all(self.db)
            .await?;

        let mut applicants = self.with_applications(applicants).await?;
        for applicant in applicants.iter_mut() {
            applicant
                .applications
                .retain(|a| active_application_ids.contains(&a.application.id));
        }

        Ok(applicants)
    }

    /// Gets applicants created within `[start, end]`, oldest first
    pub async fn get_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ApplicantWithRelations>, DbErr> {
        let applicants = entity::prelude::Applicant::find()
            .filter(entity::applicant::Column::CreatedAt.gte(start))
            .filter(entity::applicant::Column::CreatedAt.lte(end))
            .order_by_asc(entity::applicant::Column::CreatedAt)
            .order_by_asc(entity::applicant::Column::Id)
            .find_also_related(entity::prelude::Person)
            .all(self.db)
            .await?;

        self.with_applications(applicants).await
    }

    /// Computes applicant counts and the monthly creation trend
    pub async fn get_stats(&self) -> Result<ApplicantStats, DbErr> {
        let total_applicants = entity::prelude::Applicant::find().count(self.db).await?;

        let per_applicant = || {
            entity::prelude::Application::find()
                .select_only()
                .column(entity::application::Column::ApplicantId)
                .group_by(entity::application::Column::ApplicantId)
        };

        let applicants_with_applications = per_applicant().count(self.db).await?;
        let applicants_with_multiple_applications = per_applicant()
            .having(entity::application::Column::Id.count().gt(1))
            .count(self.db)
            .await?;

        let monthly_counts: Vec<(String, i64)> = entity::prelude::Applicant::find()
            .select_only()
            .column_as(creation_month(), "month")
            .column_as(entity::applicant::Column::Id.count(), "count")
            .group_by(creation_month())
            .order_by_desc(creation_month())
            .limit(TREND_MONTHS)
            .into_tuple()
            .all(self.db)
            .await?;
        let monthly_trend = monthly_counts
            .into_iter()
            .map(|(month, count)| (month, count as u64))
            .collect();

        Ok(ApplicantStats {
            total_applicants,
            applicants_with_applications,
            applicants_with_multiple_applications,
            applicants_without_applications: total_applicants
                .saturating_sub(applicants_with_applications),
            monthly_trend,
        })
    }

    /// Attaches each applicant's applications
    async fn with_applications(
        &self,
        applicants: Vec<(entity::applicant::Model, Option<entity::person::Model>)>,
    ) -> Result<Vec<ApplicantWithRelations>, DbErr> {
        let applicant_ids: Vec<i32> = applicants.iter().map(|(a, _)| a.id).collect();
        let mut applications = ApplicationRepository::new(self.db)
            .get_by_applicant_ids(applicant_ids)
            .await?;

        Ok(applicants
            .into_iter()
            .map(|(applicant, person)| {
                let applications = applications.remove(&applicant.id).unwrap_or_default();
                ApplicantWithRelations {
                    applicant,
                    person,
                    applications,
                }
            })
            .collect())
    }
}

/// `YYYY-MM` of an applicant's creation time.
fn creation_month() -> Expr {
    Func::cust("strftime")
        .arg("%Y-%m")
        .arg(Expr::col((
            entity::prelude::Applicant,
            entity::applicant::Column::CreatedAt,
        )))
        .into()
}
