pub mod calculate;
pub mod ranking;

use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{
        academic::AcademicRepository, annual_result::AnnualResultRepository,
        student::StudentRepository,
    },
    error::AppError,
    model::annual_result::{
        AnnualResultFilter, AnnualResultRecord, AnnualResultStats, CalculatedAnnualResult,
        CreateAnnualResultParams, StudentAnnualSummary, UpdateAnnualResultParams,
    },
    service::annual_result::ranking::RankingEntry,
    util::{date::parse_academic_year, transaction::finish_transaction},
};

pub struct AnnualResultService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnualResultService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_filtered(
        &self,
        filter: AnnualResultFilter,
    ) -> Result<Vec<AnnualResultRecord>, AppError> {
        Ok(AnnualResultRepository::new(self.db)
            .get_filtered(filter)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<AnnualResultRecord, AppError> {
        AnnualResultRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Annual result not found".to_string()))
    }

    pub async fn get_by_registration(
        &self,
        registration_id: i32,
    ) -> Result<Vec<AnnualResultRecord>, AppError> {
        Ok(AnnualResultRepository::new(self.db)
            .get_by_registration(registration_id)
            .await?)
    }

    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<AnnualResultRecord>, AppError> {
        Ok(AnnualResultRepository::new(self.db)
            .get_by_student(student_id)
            .await?)
    }

    pub async fn get_by_year(&self, academic_year: &str) -> Result<Vec<AnnualResultRecord>, AppError> {
        let academic_year = parse_academic_year(academic_year)?;

        Ok(AnnualResultRepository::new(self.db)
            .get_by_year(&academic_year)
            .await?)
    }

    /// Records the result of a registration that has none yet
    ///
    /// The academic year is taken from the registration.
    pub async fn create(
        &self,
        params: CreateAnnualResultParams,
    ) -> Result<AnnualResultRecord, AppError> {
        let registration = AcademicRepository::new(self.db)
            .find_registration(params.registration_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registration not found".to_string()))?;

        let repo = AnnualResultRepository::new(self.db);

        if repo.find_by_registration(registration.id).await?.is_some() {
            return Err(AppError::Duplicate(
                "Registration already has an annual result".to_string(),
            ));
        }

        let result = repo.create(registration.academic_year, params).await?;

        self.get_by_id(result.id).await
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateAnnualResultParams,
    ) -> Result<AnnualResultRecord, AppError> {
        AnnualResultRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Annual result not found".to_string()))?;

        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = AnnualResultRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Annual result not found".to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }

    pub async fn get_ranking(
        &self,
        academic_year: &str,
        specialization_id: Option<i32>,
    ) -> Result<Vec<AnnualResultRecord>, AppError> {
        let academic_year = parse_academic_year(academic_year)?;

        Ok(AnnualResultRepository::new(self.db)
            .get_ranking(&academic_year, specialization_id)
            .await?)
    }

    /// Recomputes the class ranking of every cohort of a year
    pub async fn update_ranking(
        &self,
        academic_year: &str,
        specialization_id: Option<i32>,
    ) -> Result<Vec<AnnualResultRecord>, AppError> {
        let academic_year = parse_academic_year(academic_year)?;

        let txn = self.db.begin().await?;
        let result = Self::update_ranking_in(&txn, &academic_year, specialization_id).await;
        let updated = finish_transaction(txn, result).await?;

        tracing::debug!(
            "Updated {} rankings for {}",
            updated,
            academic_year
        );

        self.get_ranking(&academic_year, specialization_id).await
    }

    async fn update_ranking_in(
        txn: &DatabaseTransaction,
        academic_year: &str,
        specialization_id: Option<i32>,
    ) -> Result<usize, AppError> {
        let repo = AnnualResultRepository::new(txn);

        let results = repo
            .get_with_registrations(academic_year, specialization_id)
            .await?;

        let entries: Vec<RankingEntry> = results
            .iter()
            .filter_map(|(result, registration)| {
                registration.as_ref().map(|registration| RankingEntry {
                    result_id: result.id,
                    specialization_id: registration.specialization_id,
                    study_level: registration.study_level,
                    average: result.annual_average,
                })
            })
            .collect();

        let ranks = ranking::rank(&entries);

        let mut updated = 0;
        for (result, _) in &results {
            let Some(rank) = ranks.get(&result.id).copied() else {
                continue;
            };
            if result.ranking != rank {
                repo.set_ranking(result.id, rank).await?;
                updated += 1;
            }
        }

        Ok(updated)
    }

    pub async fn get_stats(&self, academic_year: &str) -> Result<AnnualResultStats, AppError> {
        let academic_year = parse_academic_year(academic_year)?;

        Ok(AnnualResultRepository::new(self.db)
            .get_stats(&academic_year)
            .await?)
    }

    pub async fn get_student_summary(
        &self,
        student_id: i32,
    ) -> Result<StudentAnnualSummary, AppError> {
        let student = StudentRepository::new(self.db)
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        let results = AnnualResultRepository::new(self.db)
            .get_by_student(student_id)
            .await?;

        Ok(StudentAnnualSummary { student, results })
    }

    /// Computes a registration's annual result from its grades without storing it
    pub async fn calculate(&self, registration_id: i32) -> Result<CalculatedAnnualResult, AppError> {
        Self::calculate_in(self.db, registration_id).await
    }

    /// Calculates and stores a registration's annual result
    ///
    /// # Returns
    /// - `Ok((record, true))` - A result was created
    /// - `Ok((record, false))` - The existing result was overwritten, its ranking kept
    pub async fn generate(
        &self,
        registration_id: i32,
    ) -> Result<(AnnualResultRecord, bool), AppError> {
        let txn = self.db.begin().await?;
        let result = Self::generate_in(&txn, registration_id).await;
        let (id, created) = finish_transaction(txn, result).await?;

        tracing::debug!(
            "Generated annual result {} for registration {}",
            id,
            registration_id
        );

        Ok((self.get_by_id(id).await?, created))
    }

    async fn generate_in(
        txn: &DatabaseTransaction,
        registration_id: i32,
    ) -> Result<(i32, bool), AppError> {
        let calculated = Self::calculate_in(txn, registration_id).await?;

        let repo = AnnualResultRepository::new(txn);
        let existing = repo.find_by_registration(registration_id).await?;
        let created = existing.is_none();

        let stored = repo.store_calculated(existing, calculated).await?;

        Ok((stored.id, created))
    }

    async fn calculate_in<C: ConnectionTrait>(
        db: &C,
        registration_id: i32,
    ) -> Result<CalculatedAnnualResult, AppError> {
        let academic = AcademicRepository::new(db);

        let registration = academic
            .find_registration(registration_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registration not found".to_string()))?;

        let grades = academic
            .get_grades_by_registration(vec![registration_id])
            .await?
            .remove(&registration_id)
            .unwrap_or_default();

        Ok(calculate::calculate(&registration, &grades))
    }
}
