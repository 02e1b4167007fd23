use entity::sea_orm_active_enums::UniversityStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::university::UniversityRepository,
    error::AppError,
    model::university::{CreateUniversityParams, UniversityStats, UpdateUniversityParams},
};

pub struct UniversityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UniversityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::university::Model>, AppError> {
        Ok(UniversityRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<entity::university::Model, AppError> {
        UniversityRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("University not found".to_string()))
    }

    /// Creates a university after checking its code is unused
    pub async fn create(
        &self,
        params: CreateUniversityParams,
    ) -> Result<entity::university::Model, AppError> {
        let repo = UniversityRepository::new(self.db);

        if repo.code_taken(&params.code, None).await? {
            return Err(AppError::Duplicate(
                "University code already exists".to_string(),
            ));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateUniversityParams,
    ) -> Result<entity::university::Model, AppError> {
        let repo = UniversityRepository::new(self.db);

        if let Some(code) = &params.code {
            if repo.code_taken(code, Some(id)).await? {
                return Err(AppError::Duplicate(
                    "University code already exists".to_string(),
                ));
            }
        }

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("University not found".to_string()))
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: UniversityStatus,
    ) -> Result<entity::university::Model, AppError> {
        UniversityRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("University not found".to_string()))
    }

    /// Deletes a university that nothing references
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = UniversityRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("University not found".to_string()));
        }

        if repo.count_dependents(id).await? > 0 {
            return Err(AppError::Dependency(
                "Cannot delete university with associated users, students, programs, competitions, or news"
                    .to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(())
    }

    pub async fn get_stats(&self, id: i32) -> Result<UniversityStats, AppError> {
        let repo = UniversityRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("University not found".to_string()));
        }

        Ok(repo.get_stats(id).await?)
    }
}
