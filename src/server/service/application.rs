use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        applicant::ApplicantRepository, application::ApplicationRepository,
        competition::CompetitionRepository,
    },
    error::AppError,
    model::application::{ApplicationFilter, ApplicationWithCompetition, CreateApplicationParams},
};

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_filtered(
        &self,
        filter: ApplicationFilter,
    ) -> Result<Vec<ApplicationWithCompetition>, AppError> {
        Ok(ApplicationRepository::new(self.db)
            .get_filtered(filter)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ApplicationWithCompetition, AppError> {
        ApplicationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))
    }

    /// Files a pending application after checking applicant and competition exist
    pub async fn create(
        &self,
        params: CreateApplicationParams,
    ) -> Result<ApplicationWithCompetition, AppError> {
        if ApplicantRepository::new(self.db)
            .find_by_id(params.applicant_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Applicant not found".to_string()));
        }

        if CompetitionRepository::new(self.db)
            .find_by_id(params.competition_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Competition not found".to_string()));
        }

        let application = ApplicationRepository::new(self.db).create(params).await?;

        self.get_by_id(application.id).await
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: ApplicationStatus,
    ) -> Result<ApplicationWithCompetition, AppError> {
        ApplicationRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ApplicationRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Application not found".to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
