pub mod code;

use chrono::Utc;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{
        applicant::ApplicantRepository, application::ApplicationRepository,
        person::PersonRepository,
    },
    error::AppError,
    model::applicant::{
        ApplicantStats, ApplicantWithRelations, ApplicationHistory, CreateApplicantParams,
        DateWindow, MergeApplicantsParams,
    },
    service::{applicant::code::ApplicationCodeGenerator, person::ensure_person_unique},
    util::{search::validate_search_term, transaction::finish_transaction},
};

pub struct ApplicantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(
        &self,
        has_applications: Option<bool>,
    ) -> Result<Vec<ApplicantWithRelations>, AppError> {
        Ok(ApplicantRepository::new(self.db)
            .get_all(has_applications)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ApplicantWithRelations, AppError> {
        ApplicantRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Applicant not found".to_string()))
    }

    pub async fn get_by_code(&self, code: &str) -> Result<ApplicantWithRelations, AppError> {
        ApplicantRepository::new(self.db)
            .get_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound("Applicant not found".to_string()))
    }

    pub async fn get_by_person_id(&self, person_id: i32) -> Result<ApplicantWithRelations, AppError> {
        ApplicantRepository::new(self.db)
            .get_by_person_id(person_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Applicant not found for this person".to_string()))
    }

    /// Creates a person and its applicant record with a fresh application code
    pub async fn create(
        &self,
        params: CreateApplicantParams,
    ) -> Result<ApplicantWithRelations, AppError> {
        let txn = self.db.begin().await?;
        let result = Self::create_in(&txn, params).await;
        let applicant_id = finish_transaction(txn, result).await?;

        tracing::debug!("Created applicant {}", applicant_id);

        self.get_by_id(applicant_id).await
    }

    async fn create_in(
        txn: &DatabaseTransaction,
        params: CreateApplicantParams,
    ) -> Result<i32, AppError> {
        ensure_person_unique(
            txn,
            params.person.national_id.as_deref(),
            params.person.personal_email.as_deref(),
            None,
        )
        .await?;

        let person = PersonRepository::new(txn).create(params.person).await?;
        let code = ApplicationCodeGenerator::new(txn).generate().await?;
        let applicant = ApplicantRepository::new(txn).create(person.id, code).await?;

        Ok(applicant.id)
    }

    /// Updates an applicant, replacing the application code when one is supplied
    pub async fn update(
        &self,
        id: i32,
        application_code: Option<String>,
    ) -> Result<ApplicantWithRelations, AppError> {
        let repo = ApplicantRepository::new(self.db);

        let Some(application_code) = application_code else {
            return self.get_by_id(id).await;
        };

        if repo.code_taken(&application_code, Some(id)).await? {
            return Err(AppError::Duplicate(
                "Application code already exists for another applicant".to_string(),
            ));
        }

        repo.update_code(id, application_code)
            .await?
            .ok_or_else(|| AppError::NotFound("Applicant not found".to_string()))?;

        self.get_by_id(id).await
    }

    /// Assigns a newly generated application code
    pub async fn regenerate_code(&self, id: i32) -> Result<ApplicantWithRelations, AppError> {
        let txn = self.db.begin().await?;
        let result = Self::regenerate_code_in(&txn, id).await;
        finish_transaction(txn, result).await?;

        self.get_by_id(id).await
    }

    async fn regenerate_code_in(txn: &DatabaseTransaction, id: i32) -> Result<(), AppError> {
        let repo = ApplicantRepository::new(txn);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Applicant not found".to_string()));
        }

        let code = ApplicationCodeGenerator::new(txn).generate().await?;
        repo.update_code(id, code).await?;

        Ok(())
    }

    /// Deletes an applicant and its person unless applications reference the applicant
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let result = Self::delete_in(&txn, id).await;
        finish_transaction(txn, result).await
    }

    async fn delete_in(txn: &DatabaseTransaction, id: i32) -> Result<(), AppError> {
        let repo = ApplicantRepository::new(txn);

        let applicant = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Applicant not found".to_string()))?;

        if repo.count_applications(id).await? > 0 {
            return Err(AppError::Dependency(
                "Cannot delete applicant with associated applications".to_string(),
            ));
        }

        repo.delete(id).await?;
        PersonRepository::new(txn).delete(applicant.person_id).await?;

        Ok(())
    }

    pub async fn search(&self, term: &str) -> Result<Vec<ApplicantWithRelations>, AppError> {
        let term = validate_search_term(term)?;

        Ok(ApplicantRepository::new(self.db).search(&term).await?)
    }

    /// Gets applicants with pending applications to competitions still accepting them
    pub async fn get_with_active_applications(
        &self,
    ) -> Result<Vec<ApplicantWithRelations>, AppError> {
        Ok(ApplicantRepository::new(self.db)
            .get_with_active_applications(Utc::now())
            .await?)
    }

    pub async fn get_created_between(
        &self,
        window: &DateWindow,
    ) -> Result<Vec<ApplicantWithRelations>, AppError> {
        Ok(ApplicantRepository::new(self.db)
            .get_created_between(window.start, window.end)
            .await?)
    }

    pub async fn get_stats(&self) -> Result<ApplicantStats, AppError> {
        Ok(ApplicantRepository::new(self.db).get_stats().await?)
    }

    pub async fn get_application_history(&self, id: i32) -> Result<ApplicationHistory, AppError> {
        let applicant = self.get_by_id(id).await?;

        Ok(ApplicationHistory::new(applicant))
    }

    /// Moves every application of the source applicant to the target, then deletes the
    /// source applicant and its person
    ///
    /// # Returns
    /// - `Ok(ApplicantWithRelations)` - The target applicant after the merge
    /// - `Err(AppError::NotFound)` - Either applicant is missing; nothing is changed
    pub async fn merge(
        &self,
        params: MergeApplicantsParams,
    ) -> Result<ApplicantWithRelations, AppError> {
        let txn = self.db.begin().await?;
        let result = Self::merge_in(&txn, params).await;
        let moved = finish_transaction(txn, result).await?;

        tracing::debug!(
            "Merged applicant {} into {} ({} applications moved)",
            params.source_applicant_id,
            params.target_applicant_id,
            moved
        );

        self.get_by_id(params.target_applicant_id).await
    }

    async fn merge_in(
        txn: &DatabaseTransaction,
        params: MergeApplicantsParams,
    ) -> Result<u64, AppError> {
        let repo = ApplicantRepository::new(txn);

        let source = repo.find_by_id(params.source_applicant_id).await?;
        let target = repo.find_by_id(params.target_applicant_id).await?;

        let (Some(source), Some(_)) = (source, target) else {
            return Err(AppError::NotFound(
                "One or both applicants not found".to_string(),
            ));
        };

        let moved = ApplicationRepository::new(txn)
            .reassign(source.id, params.target_applicant_id)
            .await?;

        repo.delete(source.id).await?;
        PersonRepository::new(txn).delete(source.person_id).await?;

        Ok(moved)
    }
}
