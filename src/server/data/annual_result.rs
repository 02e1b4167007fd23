use entity::sea_orm_active_enums::{BoardDecision, Honors};
use sea_orm::{
    sea_query::{Expr, NullOrdering},
    ActiveEnum, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, Iterable, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select,
};
use std::collections::{BTreeMap, HashMap};

use crate::server::{
    data::academic::AcademicRepository,
    model::annual_result::{
        AnnualResultFilter, AnnualResultRecord, AnnualResultStats, CalculatedAnnualResult,
        CreateAnnualResultParams, UpdateAnnualResultParams,
    },
};

/// Key used in decision statistics for results the board has not ruled on.
pub const PENDING_DECISION: &str = "pending";

/// Key used in honors statistics for results without honors.
pub const NO_HONORS: &str = "none";

pub struct AnnualResultRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AnnualResultRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets results matching every supplied filter, latest year and best average first
    pub async fn get_filtered(
        &self,
        filter: AnnualResultFilter,
    ) -> Result<Vec<AnnualResultRecord>, DbErr> {
        let mut query = entity::prelude::AnnualResult::find();

        if let Some(academic_year) = filter.academic_year {
            query = query.filter(entity::annual_result::Column::AcademicYear.eq(academic_year));
        }
        if let Some(board_decision) = filter.board_decision {
            query = query.filter(entity::annual_result::Column::BoardDecision.eq(board_decision));
        }

        let results = query
            .order_by_desc(entity::annual_result::Column::AcademicYear)
            .order_by_with_nulls(
                entity::annual_result::Column::AnnualAverage,
                Order::Desc,
                NullOrdering::Last,
            )
            .order_by_asc(entity::annual_result::Column::Id)
            .all(self.db)
            .await?;

        self.with_relations(results).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::annual_result::Model>, DbErr> {
        entity::prelude::AnnualResult::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<AnnualResultRecord>, DbErr> {
        let result = self.find_by_id(id).await?;

        Ok(self.with_relations(result.into_iter().collect()).await?.pop())
    }

    pub async fn find_by_registration(
        &self,
        registration_id: i32,
    ) -> Result<Option<entity::annual_result::Model>, DbErr> {
        entity::prelude::AnnualResult::find()
            .filter(entity::annual_result::Column::RegistrationId.eq(registration_id))
            .one(self.db)
            .await
    }

    pub async fn get_by_registration(
        &self,
        registration_id: i32,
    ) -> Result<Vec<AnnualResultRecord>, DbErr> {
        let results = entity::prelude::AnnualResult::find()
            .filter(entity::annual_result::Column::RegistrationId.eq(registration_id))
            .order_by_asc(entity::annual_result::Column::Id)
            .all(self.db)
            .await?;

        self.with_relations(results).await
    }

    /// Gets every result of a student, latest academic year first
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<AnnualResultRecord>, DbErr> {
        let results = with_registration(entity::prelude::AnnualResult::find())
            .filter(entity::student_registration::Column::StudentId.eq(student_id))
            .order_by_desc(entity::annual_result::Column::AcademicYear)
            .order_by_desc(entity::annual_result::Column::Id)
            .all(self.db)
            .await?;

        self.with_relations(results).await
    }

    /// Gets the results of an academic year, best average first
    pub async fn get_by_year(&self, academic_year: &str) -> Result<Vec<AnnualResultRecord>, DbErr> {
        let results = entity::prelude::AnnualResult::find()
            .filter(entity::annual_result::Column::AcademicYear.eq(academic_year))
            .order_by_with_nulls(
                entity::annual_result::Column::AnnualAverage,
                Order::Desc,
                NullOrdering::Last,
            )
            .order_by_asc(entity::annual_result::Column::Id)
            .all(self.db)
            .await?;

        self.with_relations(results).await
    }

    /// Gets the ranked results of a year, unranked results last
    pub async fn get_ranking(
        &self,
        academic_year: &str,
        specialization_id: Option<i32>,
    ) -> Result<Vec<AnnualResultRecord>, DbErr> {
        let results = in_cohorts(academic_year, specialization_id)
            .order_by_with_nulls(
                entity::annual_result::Column::Ranking,
                Order::Asc,
                NullOrdering::Last,
            )
            .order_by_with_nulls(
                entity::annual_result::Column::AnnualAverage,
                Order::Desc,
                NullOrdering::Last,
            )
            .order_by_asc(entity::annual_result::Column::Id)
            .all(self.db)
            .await?;

        self.with_relations(results).await
    }

    /// Gets the results of a year with the registration each was earned under
    pub async fn get_with_registrations(
        &self,
        academic_year: &str,
        specialization_id: Option<i32>,
    ) -> Result<
        Vec<(
            entity::annual_result::Model,
            Option<entity::student_registration::Model>,
        )>,
        DbErr,
    > {
        in_cohorts(academic_year, specialization_id)
            .select_also(entity::prelude::StudentRegistration)
            .order_by_asc(entity::annual_result::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        academic_year: String,
        params: CreateAnnualResultParams,
    ) -> Result<entity::annual_result::Model, DbErr> {
        entity::annual_result::ActiveModel {
            registration_id: ActiveValue::Set(params.registration_id),
            academic_year: ActiveValue::Set(academic_year),
            annual_average: ActiveValue::Set(params.annual_average),
            credits_earned: ActiveValue::Set(params.credits_earned),
            board_decision: ActiveValue::Set(params.board_decision),
            honors: ActiveValue::Set(params.honors),
            ranking: ActiveValue::Set(params.ranking),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateAnnualResultParams,
    ) -> Result<Option<entity::annual_result::Model>, DbErr> {
        let Some(result) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut am = result.into_active_model();
        if params.annual_average.is_some() {
            am.annual_average = ActiveValue::Set(params.annual_average);
        }
        if let Some(credits_earned) = params.credits_earned {
            am.credits_earned = ActiveValue::Set(credits_earned);
        }
        if params.board_decision.is_some() {
            am.board_decision = ActiveValue::Set(params.board_decision);
        }
        if params.honors.is_some() {
            am.honors = ActiveValue::Set(params.honors);
        }
        if params.ranking.is_some() {
            am.ranking = ActiveValue::Set(params.ranking);
        }

        Ok(Some(am.update(self.db).await?))
    }

    /// Writes a calculated result over `existing`, or inserts it
    ///
    /// The ranking of an existing result is kept.
    pub async fn store_calculated(
        &self,
        existing: Option<entity::annual_result::Model>,
        calculated: CalculatedAnnualResult,
    ) -> Result<entity::annual_result::Model, DbErr> {
        let inserting = existing.is_none();
        let mut am = match existing {
            Some(result) => result.into_active_model(),
            None => entity::annual_result::ActiveModel {
                registration_id: ActiveValue::Set(calculated.registration_id),
                ranking: ActiveValue::Set(None),
                ..Default::default()
            },
        };

        am.academic_year = ActiveValue::Set(calculated.academic_year);
        am.annual_average = ActiveValue::Set(calculated.annual_average);
        am.credits_earned = ActiveValue::Set(calculated.credits_earned);
        am.board_decision = ActiveValue::Set(calculated.board_decision);
        am.honors = ActiveValue::Set(calculated.honors);

        if inserting {
            am.insert(self.db).await
        } else {
            am.update(self.db).await
        }
    }

    pub async fn set_ranking(&self, id: i32, ranking: Option<i32>) -> Result<(), DbErr> {
        entity::prelude::AnnualResult::update_many()
            .col_expr(entity::annual_result::Column::Ranking, Expr::value(ranking))
            .filter(entity::annual_result::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AnnualResult::delete_by_id(id)
            .exec(self.db)
            .await
    }

    /// Computes the averages and decision breakdown of an academic year
    pub async fn get_stats(&self, academic_year: &str) -> Result<AnnualResultStats, DbErr> {
        let scoped = || {
            entity::prelude::AnnualResult::find()
                .filter(entity::annual_result::Column::AcademicYear.eq(academic_year))
        };

        let total_results = scoped().count(self.db).await?;
        let graded_results = scoped()
            .filter(entity::annual_result::Column::AnnualAverage.is_not_null())
            .count(self.db)
            .await?;

        let (average, highest, lowest) = scoped()
            .select_only()
            .column_as(entity::annual_result::Column::AnnualAverage.avg(), "average")
            .column_as(entity::annual_result::Column::AnnualAverage.max(), "highest")
            .column_as(entity::annual_result::Column::AnnualAverage.min(), "lowest")
            .into_tuple::<(Option<f64>, Option<f64>, Option<f64>)>()
            .one(self.db)
            .await?
            .unwrap_or_default();

        let decision_counts: Vec<(Option<BoardDecision>, i64)> = scoped()
            .select_only()
            .column(entity::annual_result::Column::BoardDecision)
            .column_as(entity::annual_result::Column::Id.count(), "count")
            .group_by(entity::annual_result::Column::BoardDecision)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut decision_stats: BTreeMap<String, u64> = BoardDecision::iter()
            .map(|d| d.to_value())
            .chain([PENDING_DECISION.to_string()])
            .map(|key| (key, 0))
            .collect();
        for (decision, count) in decision_counts {
            let key = decision
                .map(|d| d.to_value())
                .unwrap_or_else(|| PENDING_DECISION.to_string());
            decision_stats.insert(key, count as u64);
        }

        let honors_counts: Vec<(Option<Honors>, i64)> = scoped()
            .select_only()
            .column(entity::annual_result::Column::Honors)
            .column_as(entity::annual_result::Column::Id.count(), "count")
            .group_by(entity::annual_result::Column::Honors)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut honors_stats: BTreeMap<String, u64> = Honors::iter()
            .map(|h| h.to_value())
            .chain([NO_HONORS.to_string()])
            .map(|key| (key, 0))
            .collect();
        for (honors, count) in honors_counts {
            let key = honors
                .map(|h| h.to_value())
                .unwrap_or_else(|| NO_HONORS.to_string());
            honors_stats.insert(key, count as u64);
        }

        Ok(AnnualResultStats {
            academic_year: academic_year.to_string(),
            total_results,
            graded_results,
            average,
            highest,
            lowest,
            decision_stats,
            honors_stats,
        })
    }

    /// Attaches each result's registration and student
    async fn with_relations(
        &self,
        results: Vec<entity::annual_result::Model>,
    ) -> Result<Vec<AnnualResultRecord>, DbErr> {
        let registration_ids: Vec<i32> = results.iter().map(|r| r.registration_id).collect();
        let mut registrations = AcademicRepository::new(self.db)
            .get_registrations_by_ids(registration_ids)
            .await?;

        let student_ids: Vec<i32> = registrations
            .values()
            .map(|r| r.registration.student_id)
            .collect();
        let students: HashMap<i32, (entity::student::Model, Option<entity::person::Model>)> =
            if !student_ids.is_empty() {
                entity::prelude::Student::find()
                    .filter(entity::student::Column::Id.is_in(student_ids))
                    .find_also_related(entity::prelude::Person)
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(|(s, p)| (s.id, (s, p)))
                    .collect()
            } else {
                HashMap::new()
            };

        Ok(results
            .into_iter()
            .map(|result| {
                let registration = registrations.remove(&result.registration_id);
                let (student, person) = match registration
                    .as_ref()
                    .and_then(|r| students.get(&r.registration.student_id))
                    .cloned()
                {
                    Some((s, p)) => (Some(s), p),
                    None => (None, None),
                };

                AnnualResultRecord {
                    result,
                    registration,
                    student,
                    person,
                }
            })
            .collect())
    }
}

/// Joins each result to its registration.
fn with_registration(
    query: Select<entity::annual_result::Entity>,
) -> Select<entity::annual_result::Entity> {
    query.join(
        sea_orm::JoinType::InnerJoin,
        entity::annual_result::Relation::StudentRegistration.def(),
    )
}

/// Results of a year, optionally limited to one specialization.
fn in_cohorts(
    academic_year: &str,
    specialization_id: Option<i32>,
) -> Select<entity::annual_result::Entity> {
    let mut query = with_registration(entity::prelude::AnnualResult::find())
        .filter(entity::annual_result::Column::AcademicYear.eq(academic_year));

    if let Some(specialization_id) = specialization_id {
        query = query.filter(
            entity::student_registration::Column::SpecializationId.eq(specialization_id),
        );
    }

    query
}
