use entity::sea_orm_active_enums::{UserRole, UserStatus};
use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{
        academic::AcademicRepository, person::PersonRepository,
        university::UniversityRepository, user::UserRepository,
    },
    error::AppError,
    model::user::{
        CreateUserParams, UpdateUserParams, UserDetail, UserFilter, UserStats, UserWithRelations,
    },
    service::person::ensure_person_unique,
    util::{search::validate_search_term, transaction::finish_transaction},
};

/// Fails with `Duplicate` when another user already holds `employee_id` or `email`.
async fn ensure_user_unique<C: ConnectionTrait>(
    db: &C,
    employee_id: Option<&str>,
    email: Option<&str>,
    exclude_id: Option<i32>,
) -> Result<(), AppError> {
    let repo = UserRepository::new(db);

    let employee_id_taken = match employee_id {
        Some(employee_id) => repo.employee_id_taken(employee_id, exclude_id).await?,
        None => false,
    };
    let email_taken = match email {
        Some(email) => repo.email_taken(email, exclude_id).await?,
        None => false,
    };

    if employee_id_taken || email_taken {
        return Err(AppError::Duplicate(
            "Employee ID or email already exists for another user".to_string(),
        ));
    }

    Ok(())
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_filtered(&self, filter: UserFilter) -> Result<Vec<UserWithRelations>, AppError> {
        Ok(UserRepository::new(self.db).get_filtered(filter).await?)
    }

    /// Gets a user with person, university and taught courses
    pub async fn get_by_id(&self, id: i32) -> Result<UserDetail, AppError> {
        Self::get_detail(self.db, id).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<UserWithRelations, AppError> {
        UserRepository::new(self.db)
            .get_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn get_by_employee_id(&self, employee_id: &str) -> Result<UserWithRelations, AppError> {
        UserRepository::new(self.db)
            .get_by_employee_id(employee_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn get_by_role(&self, role: UserRole) -> Result<Vec<UserWithRelations>, AppError> {
        self.get_filtered(UserFilter {
            role: Some(role),
            ..Default::default()
        })
        .await
    }

    /// Gets every teacher with the courses they teach
    pub async fn get_teachers_with_courses(&self) -> Result<Vec<UserDetail>, AppError> {
        let teachers = self.get_by_role(UserRole::Teacher).await?;

        let teacher_ids = teachers.iter().map(|t| t.user.id).collect();
        let mut courses = AcademicRepository::new(self.db)
            .get_courses_by_teacher(teacher_ids)
            .await?;

        Ok(teachers
            .into_iter()
            .map(|user| {
                let courses = courses.remove(&user.user.id).unwrap_or_default();
                UserDetail { user, courses }
            })
            .collect())
    }

    /// Creates a person and its staff user in one transaction
    pub async fn create(&self, params: CreateUserParams) -> Result<UserDetail, AppError> {
        let txn = self.db.begin().await?;
        let result = Self::create_in(&txn, params).await;
        let user_id = finish_transaction(txn, result).await?;

        tracing::debug!("Created user {}", user_id);

        Self::get_detail(self.db, user_id).await
    }

    async fn create_in(txn: &DatabaseTransaction, params: CreateUserParams) -> Result<i32, AppError> {
        if UniversityRepository::new(txn)
            .find_by_id(params.university_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("University not found".to_string()));
        }

        ensure_user_unique(
            txn,
            Some(&params.employee_id),
            Some(&params.email),
            None,
        )
        .await?;
        ensure_person_unique(
            txn,
            params.person.national_id.as_deref(),
            params.person.personal_email.as_deref(),
            None,
        )
        .await?;

        let person = PersonRepository::new(txn)
            .create(params.person.clone())
            .await?;
        let user = UserRepository::new(txn).create(person.id, &params).await?;

        Ok(user.id)
    }

    /// Updates a user and its person in one transaction
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<UserDetail, AppError> {
        let txn = self.db.begin().await?;
        let result = Self::update_in(&txn, id, params).await;
        finish_transaction(txn, result).await?;

        Self::get_detail(self.db, id).await
    }

    async fn update_in(
        txn: &DatabaseTransaction,
        id: i32,
        params: UpdateUserParams,
    ) -> Result<(), AppError> {
        let repo = UserRepository::new(txn);

        let user = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if let Some(university_id) = params.university_id {
            if UniversityRepository::new(txn)
                .find_by_id(university_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("University not found".to_string()));
            }
        }

        ensure_user_unique(
            txn,
            params.employee_id.as_deref(),
            params.email.as_deref(),
            Some(id),
        )
        .await?;
        ensure_person_unique(
            txn,
            params.person.national_id.as_deref(),
            params.person.personal_email.as_deref(),
            Some(user.person_id),
        )
        .await?;

        PersonRepository::new(txn)
            .update(user.person_id, params.person.clone())
            .await?;
        repo.update(id, &params).await?;

        Ok(())
    }

    pub async fn update_status(&self, id: i32, status: UserStatus) -> Result<UserDetail, AppError> {
        UserRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Self::get_detail(self.db, id).await
    }

    /// Deletes a user and its person unless the user still teaches courses
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let result = Self::delete_in(&txn, id).await;
        finish_transaction(txn, result).await
    }

    async fn delete_in(txn: &DatabaseTransaction, id: i32) -> Result<(), AppError> {
        let repo = UserRepository::new(txn);

        let user = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if repo.count_courses(id).await? > 0 {
            return Err(AppError::Dependency(
                "Cannot delete user with assigned courses".to_string(),
            ));
        }

        repo.delete(id).await?;
        PersonRepository::new(txn).delete(user.person_id).await?;

        Ok(())
    }

    pub async fn get_stats(&self, university_id: Option<i32>) -> Result<UserStats, AppError> {
        Ok(UserRepository::new(self.db).get_stats(university_id).await?)
    }

    pub async fn search(&self, term: &str) -> Result<Vec<UserWithRelations>, AppError> {
        let term = validate_search_term(term)?;

        Ok(UserRepository::new(self.db).search(&term).await?)
    }

    /// Moves every course taught by one user to another
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of courses moved
    /// - `Err(AppError::Validation)` - Source and target are the same user
    /// - `Err(AppError::NotFound)` - Either user is missing
    pub async fn reassign_courses(&self, source_id: i32, target_id: i32) -> Result<u64, AppError> {
        if source_id == target_id {
            return Err(AppError::Validation(
                "Source and target users cannot be the same".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let result = Self::reassign_courses_in(&txn, source_id, target_id).await;
        finish_transaction(txn, result).await
    }

    async fn reassign_courses_in(
        txn: &DatabaseTransaction,
        source_id: i32,
        target_id: i32,
    ) -> Result<u64, AppError> {
        let repo = UserRepository::new(txn);

        if repo.find_by_id(source_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        if repo.find_by_id(target_id).await?.is_none() {
            return Err(AppError::NotFound("Target user not found".to_string()));
        }

        Ok(repo.reassign_courses(source_id, target_id).await?)
    }

    async fn get_detail<C: ConnectionTrait>(db: &C, id: i32) -> Result<UserDetail, AppError> {
        let user = UserRepository::new(db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let courses = AcademicRepository::new(db)
            .get_courses_by_teacher(vec![id])
            .await?
            .remove(&id)
            .unwrap_or_default();

        Ok(UserDetail { user, courses })
    }
}
