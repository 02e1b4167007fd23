use entity::sea_orm_active_enums::{UserRole, UserStatus};
use sea_orm::{
    sea_query::Expr, ActiveEnum, ActiveModelTrait, ActiveValue, ColumnTrait, Condition,
    ConnectionTrait, DbErr, DeleteResult, EntityTrait, IntoActiveModel, Iterable, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::BTreeMap;

use crate::server::{
    data::university::UniversityRepository,
    model::user::{CreateUserParams, UpdateUserParams, UserFilter, UserStats, UserWithRelations},
    util::search::SEARCH_RESULT_LIMIT,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets users matching every supplied filter, ordered by last then first name
    pub async fn get_filtered(&self, filter: UserFilter) -> Result<Vec<UserWithRelations>, DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(university_id) = filter.university_id {
            query = query.filter(entity::user::Column::UniversityId.eq(university_id));
        }
        if let Some(role) = filter.role {
            query = query.filter(entity::user::Column::Role.eq(role));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::user::Column::Status.eq(status));
        }

        let users = query
            .find_also_related(entity::prelude::Person)
            .order_by_asc(entity::person::Column::LastName)
            .order_by_asc(entity::person::Column::FirstName)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        self.with_universities(users).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Gets a user with person and university
    pub async fn get_by_id(&self, id: i32) -> Result<Option<UserWithRelations>, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .find_also_related(entity::prelude::Person)
            .one(self.db)
            .await?;

        Ok(self.with_universities(user.into_iter().collect()).await?.pop())
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserWithRelations>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .find_also_related(entity::prelude::Person)
            .one(self.db)
            .await?;

        Ok(self.with_universities(user.into_iter().collect()).await?.pop())
    }

    pub async fn get_by_employee_id(
        &self,
        employee_id: &str,
    ) -> Result<Option<UserWithRelations>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::EmployeeId.eq(employee_id))
            .find_also_related(entity::prelude::Person)
            .one(self.db)
            .await?;

        Ok(self.with_universities(user.into_iter().collect()).await?.pop())
    }

    /// Checks whether another user already uses `employee_id`
    pub async fn employee_id_taken(
        &self,
        employee_id: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::User::find()
            .filter(entity::user::Column::EmployeeId.eq(employee_id));

        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether another user already uses `email` as work email
    pub async fn email_taken(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(
        &self,
        person_id: i32,
        params: &CreateUserParams,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            person_id: ActiveValue::Set(person_id),
            university_id: ActiveValue::Set(params.university_id),
            employee_id: ActiveValue::Set(params.employee_id.clone()),
            email: ActiveValue::Set(params.email.clone()),
            phone: ActiveValue::Set(params.phone.clone()),
            role: ActiveValue::Set(params.role),
            status: ActiveValue::Set(params.status),
            hire_date: ActiveValue::Set(params.hire_date),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates the supplied user fields, leaving the person row untouched
    pub async fn update(
        &self,
        id: i32,
        params: &UpdateUserParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut am = user.into_active_model();
        if let Some(university_id) = params.university_id {
            am.university_id = ActiveValue::Set(university_id);
        }
        if let Some(employee_id) = &params.employee_id {
            am.employee_id = ActiveValue::Set(employee_id.clone());
        }
        if let Some(email) = &params.email {
            am.email = ActiveValue::Set(email.clone());
        }
        if params.phone.is_some() {
            am.phone = ActiveValue::Set(params.phone.clone());
        }
        if let Some(role) = params.role {
            am.role = ActiveValue::Set(role);
        }
        if let Some(status) = params.status {
            am.status = ActiveValue::Set(status);
        }
        if params.hire_date.is_some() {
            am.hire_date = ActiveValue::Set(params.hire_date);
        }

        Ok(Some(am.update(self.db).await?))
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: UserStatus,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut am = user.into_active_model();
        am.status = ActiveValue::Set(status);

        Ok(Some(am.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(id).exec(self.db).await
    }

    /// Counts the courses taught by a user
    pub async fn count_courses(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Course::find()
            .filter(entity::course::Column::TeacherId.eq(id))
            .count(self.db)
            .await
    }

    /// Moves every course taught by `source_id` to `target_id`
    ///
    /// Returns the number of courses moved.
    pub async fn reassign_courses(&self, source_id: i32, target_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Course::update_many()
            .col_expr(entity::course::Column::TeacherId, Expr::value(target_id))
            .filter(entity::course::Column::TeacherId.eq(source_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Searches users by name, employee ID or work email, ordered by last name
    pub async fn search(&self, term: &str) -> Result<Vec<UserWithRelations>, DbErr> {
        let users = entity::prelude::User::find()
            .find_also_related(entity::prelude::Person)
            .filter(
                Condition::any()
                    .add(entity::person::Column::FirstName.contains(term))
                    .add(entity::person::Column::LastName.contains(term))
                    .add(entity::user::Column::EmployeeId.contains(term))
                    .add(entity::user::Column::Email.contains(term)),
            )
            .order_by_asc(entity::person::Column::LastName)
            .limit(SEARCH_RESULT_LIMIT)
            .all(self.db)
            .await?;

        self.with_universities(users).await
    }

    /// Counts users per role and status, optionally within one university
    pub async fn get_stats(&self, university_id: Option<i32>) -> Result<UserStats, DbErr> {
        let scoped = || {
            let mut query = entity::prelude::User::find();
            if let Some(university_id) = university_id {
                query = query.filter(entity::user::Column::UniversityId.eq(university_id));
            }
            query
        };

        let total_users = scoped().count(self.db).await?;

        let role_counts: Vec<(UserRole, i64)> = scoped()
            .select_only()
            .column(entity::user::Column::Role)
            .column_as(entity::user::Column::Id.count(), "count")
            .group_by(entity::user::Column::Role)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut role_stats: BTreeMap<String, u64> =
            UserRole::iter().map(|r| (r.to_value(), 0)).collect();
        for (role, count) in role_counts {
            role_stats.insert(role.to_value(), count as u64);
        }

        let status_counts: Vec<(UserStatus, i64)> = scoped()
            .select_only()
            .column(entity::user::Column::Status)
            .column_as(entity::user::Column::Id.count(), "count")
            .group_by(entity::user::Column::Status)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut status_stats: BTreeMap<String, u64> =
            UserStatus::iter().map(|s| (s.to_value(), 0)).collect();
        for (status, count) in status_counts {
            status_stats.insert(status.to_value(), count as u64);
        }

        let active_users = status_stats
            .get(&UserStatus::Active.to_value())
            .copied()
            .unwrap_or(0);

        Ok(UserStats {
            total_users,
            active_users,
            role_stats,
            status_stats,
        })
    }

    /// Attaches each user's university
    async fn with_universities(
        &self,
        users: Vec<(entity::user::Model, Option<entity::person::Model>)>,
    ) -> Result<Vec<UserWithRelations>, DbErr> {
        let university_ids: Vec<i32> = users.iter().map(|(u, _)| u.university_id).collect();
        let universities = UniversityRepository::new(self.db)
            .find_by_ids(university_ids)
            .await?;

        Ok(users
            .into_iter()
            .map(|(user, person)| {
                let university = universities.get(&user.university_id).cloned();
                UserWithRelations {
                    user,
                    person,
                    university,
                }
            })
            .collect())
    }
}
