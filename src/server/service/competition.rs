use entity::sea_orm_active_enums::CompetitionStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{competition::CompetitionRepository, university::UniversityRepository},
    error::AppError,
    model::competition::{
        CompetitionFilter, CompetitionWithUniversity, CreateCompetitionParams,
        UpdateCompetitionParams,
    },
};

pub struct CompetitionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompetitionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_filtered(
        &self,
        filter: CompetitionFilter,
    ) -> Result<Vec<CompetitionWithUniversity>, AppError> {
        Ok(CompetitionRepository::new(self.db)
            .get_filtered(filter)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<CompetitionWithUniversity, AppError> {
        CompetitionRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))
    }

    pub async fn create(
        &self,
        params: CreateCompetitionParams,
    ) -> Result<CompetitionWithUniversity, AppError> {
        if UniversityRepository::new(self.db)
            .find_by_id(params.university_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("University not found".to_string()));
        }

        let competition = CompetitionRepository::new(self.db).create(params).await?;

        self.get_by_id(competition.id).await
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateCompetitionParams,
    ) -> Result<CompetitionWithUniversity, AppError> {
        let repo = CompetitionRepository::new(self.db);

        let current = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        let opening_date = params.opening_date.unwrap_or(current.opening_date);
        let closing_date = params.closing_date.unwrap_or(current.closing_date);
        if closing_date < opening_date {
            return Err(AppError::Validation(
                "closing_date must not be before opening_date".to_string(),
            ));
        }

        repo.update(id, params).await?;

        self.get_by_id(id).await
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: CompetitionStatus,
    ) -> Result<CompetitionWithUniversity, AppError> {
        CompetitionRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        self.get_by_id(id).await
    }

    /// Deletes a competition that has received no applications
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CompetitionRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Competition not found".to_string()));
        }

        if repo.count_applications(id).await? > 0 {
            return Err(AppError::Dependency(
                "Cannot delete competition with associated applications".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
