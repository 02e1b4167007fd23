use entity::sea_orm_active_enums::PersonType;
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::person::PersonRepository,
    error::AppError,
    model::person::{CreatePersonParams, PersonWithRoles, UpdatePersonParams},
    util::search::validate_search_term,
};

/// Fails with `Duplicate` when another person already holds `national_id` or `email`.
///
/// Each supplied attribute is checked on its own; `exclude_id` is the person being updated.
pub(crate) async fn ensure_person_unique<C: ConnectionTrait>(
    db: &C,
    national_id: Option<&str>,
    email: Option<&str>,
    exclude_id: Option<i32>,
) -> Result<(), AppError> {
    let repo = PersonRepository::new(db);

    if let Some(national_id) = national_id {
        if repo.national_id_taken(national_id, exclude_id).await? {
            return Err(AppError::Duplicate(
                "A person with this national ID already exists".to_string(),
            ));
        }
    }

    if let Some(email) = email {
        if repo.email_taken(email, exclude_id).await? {
            return Err(AppError::Duplicate(
                "A person with this email already exists".to_string(),
            ));
        }
    }

    Ok(())
}

pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePersonParams) -> Result<PersonWithRoles, AppError> {
        ensure_person_unique(
            self.db,
            params.national_id.as_deref(),
            params.personal_email.as_deref(),
            None,
        )
        .await?;

        let repo = PersonRepository::new(self.db);
        let person = repo.create(params).await?;

        Ok(repo.get_roles(person).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<PersonWithRoles, AppError> {
        let repo = PersonRepository::new(self.db);

        let person = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Person not found".to_string()))?;

        Ok(repo.get_roles(person).await?)
    }

    pub async fn get_by_national_id(&self, national_id: &str) -> Result<PersonWithRoles, AppError> {
        let repo = PersonRepository::new(self.db);

        let person = repo
            .find_by_national_id(national_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Person not found".to_string()))?;

        Ok(repo.get_roles(person).await?)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<PersonWithRoles, AppError> {
        let repo = PersonRepository::new(self.db);

        let person = repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("Person not found".to_string()))?;

        Ok(repo.get_roles(person).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdatePersonParams,
    ) -> Result<PersonWithRoles, AppError> {
        ensure_person_unique(
            self.db,
            params.national_id.as_deref(),
            params.personal_email.as_deref(),
            Some(id),
        )
        .await?;

        let repo = PersonRepository::new(self.db);
        let person = repo
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Person not found".to_string()))?;

        Ok(repo.get_roles(person).await?)
    }

    /// Searches persons; the term is validated before any query runs
    pub async fn search(
        &self,
        term: &str,
        person_type: Option<PersonType>,
    ) -> Result<Vec<entity::person::Model>, AppError> {
        let term = validate_search_term(term)?;

        Ok(PersonRepository::new(self.db)
            .search(&term, person_type)
            .await?)
    }

    /// Gets persons that are both staff and students, with their roles
    pub async fn get_with_multiple_roles(&self) -> Result<Vec<PersonWithRoles>, AppError> {
        let repo = PersonRepository::new(self.db);

        let mut result = Vec::new();
        for person in repo.find_with_multiple_roles().await? {
            result.push(repo.get_roles(person).await?);
        }

        Ok(result)
    }
}
