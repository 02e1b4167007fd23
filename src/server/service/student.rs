use entity::sea_orm_active_enums::StudentStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{
        academic::AcademicRepository, person::PersonRepository, student::StudentRepository,
        university::UniversityRepository,
    },
    error::AppError,
    model::{
        academic::{RegistrationRecord, RegistrationWithSpecialization},
        student::{
            AcademicHistory, CreateStudentParams, StudentDetail, StudentFilter, StudentStats,
            StudentWithRelations, UniversityStudent, UpdateStudentParams,
        },
    },
    service::person::ensure_person_unique,
    util::{
        date::current_academic_year, search::validate_search_term,
        transaction::finish_transaction,
    },
};

/// Number of grades included in the student detail.
const RECENT_GRADES_LIMIT: u64 = 20;

/// Fails with `Duplicate` when another student already holds `student_number` or
/// `academic_email`.
async fn ensure_student_unique<C: ConnectionTrait>(
    db: &C,
    student_number: Option<&str>,
    academic_email: Option<&str>,
    exclude_id: Option<i32>,
) -> Result<(), AppError> {
    let repo = StudentRepository::new(db);

    let number_taken = match student_number {
        Some(student_number) => repo.number_taken(student_number, exclude_id).await?,
        None => false,
    };
    let email_taken = match academic_email {
        Some(academic_email) => repo.academic_email_taken(academic_email, exclude_id).await?,
        None => false,
    };

    if number_taken || email_taken {
        return Err(AppError::Duplicate(
            "Student number or academic email already exists for another student".to_string(),
        ));
    }

    Ok(())
}

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_filtered(
        &self,
        filter: StudentFilter,
    ) -> Result<Vec<StudentWithRelations>, AppError> {
        Ok(StudentRepository::new(self.db).get_filtered(filter).await?)
    }

    /// Gets a student with cards, registrations and the most recent grades
    pub async fn get_by_id(&self, id: i32) -> Result<StudentDetail, AppError> {
        let student = StudentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        let academic = AcademicRepository::new(self.db);
        let cards = academic.get_cards(id).await?;
        let registrations = academic.get_registrations(id).await?;
        let recent_grades = academic.get_recent_grades(id, RECENT_GRADES_LIMIT).await?;

        Ok(StudentDetail {
            student,
            cards,
            registrations,
            recent_grades,
        })
    }

    pub async fn get_by_number(&self, student_number: &str) -> Result<StudentWithRelations, AppError> {
        StudentRepository::new(self.db)
            .get_by_number(student_number)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }

    /// Gets the students of a university, each with their latest registration
    ///
    /// Only the status and admission type of `filter` apply; an unknown university
    /// yields an empty list.
    pub async fn get_by_university(
        &self,
        university_id: i32,
        filter: StudentFilter,
    ) -> Result<Vec<UniversityStudent>, AppError> {
        let students = StudentRepository::new(self.db)
            .get_by_university(university_id, filter)
            .await?;

        self.with_latest_registrations(students).await
    }

    /// Gets students with a status, each with their latest registration
    pub async fn get_by_status(
        &self,
        status: StudentStatus,
        university_id: Option<i32>,
    ) -> Result<Vec<UniversityStudent>, AppError> {
        let students = StudentRepository::new(self.db)
            .get_by_status(status, university_id)
            .await?;

        self.with_latest_registrations(students).await
    }

    /// Creates a person and its student record in one transaction
    pub async fn create(&self, params: CreateStudentParams) -> Result<StudentWithRelations, AppError> {
        let txn = self.db.begin().await?;
        let result = Self::create_in(&txn, params).await;
        let student_id = finish_transaction(txn, result).await?;

        tracing::debug!("Created student {}", student_id);

        self.get_with_relations(student_id).await
    }

    async fn create_in(
        txn: &DatabaseTransaction,
        params: CreateStudentParams,
    ) -> Result<i32, AppError> {
        if UniversityRepository::new(txn)
            .find_by_id(params.university_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("University not found".to_string()));
        }

        ensure_student_unique(
            txn,
            Some(&params.student_number),
            params.academic_email.as_deref(),
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
        let student = StudentRepository::new(txn)
            .create(person.id, &params)
            .await?;

        Ok(student.id)
    }

    /// Updates a student and its person in one transaction
    pub async fn update(
        &self,
        id: i32,
        params: UpdateStudentParams,
    ) -> Result<StudentWithRelations, AppError> {
        let txn = self.db.begin().await?;
        let result = Self::update_in(&txn, id, params).await;
        finish_transaction(txn, result).await?;

        self.get_with_relations(id).await
    }

    async fn update_in(
        txn: &DatabaseTransaction,
        id: i32,
        params: UpdateStudentParams,
    ) -> Result<(), AppError> {
        let repo = StudentRepository::new(txn);

        let student = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        ensure_student_unique(
            txn,
            params.student_number.as_deref(),
            params.academic_email.as_deref(),
            Some(id),
        )
        .await?;
        ensure_person_unique(
            txn,
            params.person.national_id.as_deref(),
            params.person.personal_email.as_deref(),
            Some(student.person_id),
        )
        .await?;

        PersonRepository::new(txn)
            .update(student.person_id, params.person.clone())
            .await?;
        repo.update(id, &params).await?;

        Ok(())
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: StudentStatus,
    ) -> Result<StudentWithRelations, AppError> {
        StudentRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        self.get_with_relations(id).await
    }

    /// Deletes a student and its person unless academic records reference the student
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let result = Self::delete_in(&txn, id).await;
        finish_transaction(txn, result).await
    }

    async fn delete_in(txn: &DatabaseTransaction, id: i32) -> Result<(), AppError> {
        let repo = StudentRepository::new(txn);

        let student = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        if repo.count_dependents(id).await? > 0 {
            return Err(AppError::Dependency(
                "Cannot delete student with associated registrations, grades, or cards"
                    .to_string(),
            ));
        }

        repo.delete(id).await?;
        PersonRepository::new(txn).delete(student.person_id).await?;

        Ok(())
    }

    pub async fn get_stats(&self, university_id: Option<i32>) -> Result<StudentStats, AppError> {
        Ok(StudentRepository::new(self.db)
            .get_stats(university_id)
            .await?)
    }

    pub async fn search(
        &self,
        term: &str,
        university_id: Option<i32>,
    ) -> Result<Vec<StudentWithRelations>, AppError> {
        let term = validate_search_term(term)?;

        Ok(StudentRepository::new(self.db)
            .search(&term, university_id)
            .await?)
    }

    /// Gets every registration of a student with grades and results
    pub async fn get_academic_history(&self, id: i32) -> Result<AcademicHistory, AppError> {
        let student = self.get_with_relations(id).await?;

        let academic = AcademicRepository::new(self.db);
        let registrations = academic.get_registrations(id).await?;

        let registration_ids: Vec<i32> = registrations.iter().map(|r| r.registration.id).collect();
        let mut grades = academic
            .get_grades_by_registration(registration_ids.clone())
            .await?;
        let mut semester_results = academic
            .get_semester_results(registration_ids.clone())
            .await?;
        let mut annual_results = academic.get_annual_results(registration_ids).await?;

        let registrations = registrations
            .into_iter()
            .map(|registration| {
                let registration_id = registration.registration.id;
                RegistrationRecord {
                    registration,
                    grades: grades.remove(&registration_id).unwrap_or_default(),
                    semester_results: semester_results
                        .remove(&registration_id)
                        .unwrap_or_default(),
                    annual_result: annual_results.remove(&registration_id),
                }
            })
            .collect();

        Ok(AcademicHistory {
            student,
            registrations,
        })
    }

    /// Moves a student to another university and marks them transferred
    pub async fn transfer(
        &self,
        id: i32,
        target_university_id: i32,
    ) -> Result<StudentWithRelations, AppError> {
        let txn = self.db.begin().await?;
        let result = Self::transfer_in(&txn, id, target_university_id).await;
        finish_transaction(txn, result).await?;

        tracing::debug!(
            "Transferred student {} to university {}",
            id,
            target_university_id
        );

        self.get_with_relations(id).await
    }

    async fn transfer_in(
        txn: &DatabaseTransaction,
        id: i32,
        target_university_id: i32,
    ) -> Result<(), AppError> {
        if UniversityRepository::new(txn)
            .find_by_id(target_university_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Target university not found".to_string()));
        }

        StudentRepository::new(txn)
            .transfer(id, target_university_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        Ok(())
    }

    /// Gets the student's registration for the current academic year with its grades
    pub async fn get_current_registration(
        &self,
        id: i32,
    ) -> Result<RegistrationRecord, AppError> {
        if StudentRepository::new(self.db).find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        let academic = AcademicRepository::new(self.db);
        let registration = self.current_registration(id).await?;
        let registration_id = registration.registration.id;

        let grades = academic
            .get_grades_by_registration(vec![registration_id])
            .await?
            .remove(&registration_id)
            .unwrap_or_default();

        Ok(RegistrationRecord {
            registration,
            grades,
            semester_results: Vec::new(),
            annual_result: None,
        })
    }

    /// Marks a student graduated
    ///
    /// Requires a registration for the current academic year. Earned credits and
    /// averages are not checked.
    pub async fn graduate(&self, id: i32) -> Result<StudentWithRelations, AppError> {
        if StudentRepository::new(self.db).find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        self.current_registration(id).await?;

        self.update_status(id, StudentStatus::Graduated).await
    }

    async fn current_registration(
        &self,
        id: i32,
    ) -> Result<RegistrationWithSpecialization, AppError> {
        AcademicRepository::new(self.db)
            .get_registration_for_year(id, &current_academic_year())
            .await?
            .ok_or_else(|| {
                AppError::NotFound("No current registration found for student".to_string())
            })
    }

    async fn with_latest_registrations(
        &self,
        students: Vec<StudentWithRelations>,
    ) -> Result<Vec<UniversityStudent>, AppError> {
        let student_ids = students.iter().map(|s| s.student.id).collect();
        let mut latest = AcademicRepository::new(self.db)
            .get_latest_registrations(student_ids)
            .await?;

        Ok(students
            .into_iter()
            .map(|student| {
                let latest_registration = latest.remove(&student.student.id);
                UniversityStudent {
                    student,
                    latest_registration,
                }
            })
            .collect())
    }

    async fn get_with_relations(&self, id: i32) -> Result<StudentWithRelations, AppError> {
        StudentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }
}
