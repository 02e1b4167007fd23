use entity::sea_orm_active_enums::{AdmissionType, StudentStatus};
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, Iterable, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use std::collections::BTreeMap;

use crate::server::{
    data::university::UniversityRepository,
    model::student::{
        CreateStudentParams, StudentFilter, StudentStats, StudentWithRelations,
        UpdateStudentParams,
    },
    util::search::SEARCH_RESULT_LIMIT,
};

/// Key used in admission statistics for students without an admission type.
pub const UNSPECIFIED_ADMISSION: &str = "unspecified";

/// Number of distinct baccalaureate years reported in statistics.
const RECENT_BAC_YEARS: u64 = 5;

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets students matching every supplied filter, latest admission first
    pub async fn get_filtered(
        &self,
        filter: StudentFilter,
    ) -> Result<Vec<StudentWithRelations>, DbErr> {
        let students = filtered(&filter)
            .order_by_desc(entity::student::Column::AdmissionDate)
            .order_by_desc(entity::student::Column::Id)
            .find_also_related(entity::prelude::Person)
            .all(self.db)
            .await?;

        self.with_universities(students).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(id).one(self.db).await
    }

    /// Gets a student with person and university
    pub async fn get_by_id(&self, id: i32) -> Result<Option<StudentWithRelations>, DbErr> {
        let student = entity::prelude::Student::find_by_id(id)
            .find_also_related(entity::prelude::Person)
            .one(self.db)
            .await?;

        Ok(self
            .with_universities(student.into_iter().collect())
            .await?
            .pop())
    }

    pub async fn get_by_number(
        &self,
        student_number: &str,
    ) -> Result<Option<StudentWithRelations>, DbErr> {
        let student = entity::prelude::Student::find()
            .filter(entity::student::Column::StudentNumber.eq(student_number))
            .find_also_related(entity::prelude::Person)
            .one(self.db)
            .await?;

        Ok(self
            .with_universities(student.into_iter().collect())
            .await?
            .pop())
    }

    /// Gets the students of one university matching the status and admission type filters
    ///
    /// Ordered by last name. An unknown university yields no students.
    pub async fn get_by_university(
        &self,
        university_id: i32,
        filter: StudentFilter,
    ) -> Result<Vec<StudentWithRelations>, DbErr> {
        self.get_by_name(StudentFilter {
            university_id: Some(university_id),
            ..filter
        })
        .await
    }

    /// Checks whether another student already uses `student_number`
    pub async fn number_taken(
        &self,
        student_number: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Student::find()
            .filter(entity::student::Column::StudentNumber.eq(student_number));

        if let Some(id) = exclude_id {
            query = query.filter(entity::student::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether another student already uses `academic_email`
    pub async fn academic_email_taken(
        &self,
        academic_email: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Student::find()
            .filter(entity::student::Column::AcademicEmail.eq(academic_email));

        if let Some(id) = exclude_id {
            query = query.filter(entity::student::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(
        &self,
        person_id: i32,
        params: &CreateStudentParams,
    ) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            person_id: ActiveValue::Set(person_id),
            university_id: ActiveValue::Set(params.university_id),
            student_number: ActiveValue::Set(params.student_number.clone()),
            academic_email: ActiveValue::Set(params.academic_email.clone()),
            admission_date: ActiveValue::Set(params.admission_date),
            status: ActiveValue::Set(params.status),
            admission_type: ActiveValue::Set(params.admission_type),
            high_school_origin: ActiveValue::Set(params.high_school_origin.clone()),
            baccalaureate_year: ActiveValue::Set(params.baccalaureate_year),
            baccalaureate_series: ActiveValue::Set(params.baccalaureate_series.clone()),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates the supplied student fields, leaving the person row untouched
    pub async fn update(
        &self,
        id: i32,
        params: &UpdateStudentParams,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        let Some(student) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut am = student.into_active_model();
        if let Some(student_number) = &params.student_number {
            am.student_number = ActiveValue::Set(student_number.clone());
        }
        if params.academic_email.is_some() {
            am.academic_email = ActiveValue::Set(params.academic_email.clone());
        }
        if let Some(admission_date) = params.admission_date {
            am.admission_date = ActiveValue::Set(admission_date);
        }
        if let Some(status) = params.status {
            am.status = ActiveValue::Set(status);
        }
        if params.admission_type.is_some() {
            am.admission_type = ActiveValue::Set(params.admission_type);
        }
        if params.high_school_origin.is_some() {
            am.high_school_origin = ActiveValue::Set(params.high_school_origin.clone());
        }
        if params.baccalaureate_year.is_some() {
            am.baccalaureate_year = ActiveValue::Set(params.baccalaureate_year);
        }
        if params.baccalaureate_series.is_some() {
            am.baccalaureate_series = ActiveValue::Set(params.baccalaureate_series.clone());
        }

        Ok(Some(am.update(self.db).await?))
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: StudentStatus,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        let Some(student) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut am = student.into_active_model();
        am.status = ActiveValue::Set(status);

        Ok(Some(am.update(self.db).await?))
    }

    /// Moves a student to another university and marks them transferred
    pub async fn transfer(
        &self,
        id: i32,
        target_university_id: i32,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        let Some(student) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut am = student.into_active_model();
        am.university_id = ActiveValue::Set(target_university_id);
        am.status = ActiveValue::Set(StudentStatus::Transferred);

        Ok(Some(am.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Student::delete_by_id(id).exec(self.db).await
    }

    /// Counts registrations, grades and cards referencing a student
    pub async fn count_dependents(&self, id: i32) -> Result<u64, DbErr> {
        let registrations = entity::prelude::StudentRegistration::find()
            .filter(entity::student_registration::Column::StudentId.eq(id))
            .count(self.db)
            .await?;

        let grades = entity::prelude::Grade::find()
            .filter(entity::grade::Column::StudentId.eq(id))
            .count(self.db)
            .await?;

        let cards = entity::prelude::StudentCard::find()
            .filter(entity::student_card::Column::StudentId.eq(id))
            .count(self.db)
            .await?;

        Ok(registrations + grades + cards)
    }

    /// Gets students with a status, optionally within one university, by last name
    pub async fn get_by_status(
        &self,
        status: StudentStatus,
        university_id: Option<i32>,
    ) -> Result<Vec<StudentWithRelations>, DbErr> {
        self.get_by_name(StudentFilter {
            university_id,
            status: Some(status),
            admission_type: None,
        })
        .await
    }

    async fn get_by_name(&self, filter: StudentFilter) -> Result<Vec<StudentWithRelations>, DbErr> {
        let students = filtered(&filter)
            .find_also_related(entity::prelude::Person)
            .order_by_asc(entity::person::Column::LastName)
            .order_by_asc(entity::person::Column::FirstName)
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        self.with_universities(students).await
    }

    /// Searches students by number, academic email, name or national ID
    ///
    /// Results are ordered by last name and capped at the search limit.
    pub async fn search(
        &self,
        term: &str,
        university_id: Option<i32>,
    ) -> Result<Vec<StudentWithRelations>, DbErr> {
        let mut query = entity::prelude::Student::find()
            .find_also_related(entity::prelude::Person)
            .filter(
                Condition::any()
                    .add(entity::student::Column::StudentNumber.contains(term))
                    .add(entity::student::Column::AcademicEmail.contains(term))
                    .add(entity::person::Column::FirstName.contains(term))
                    .add(entity::person::Column::LastName.contains(term))
                    .add(entity::person::Column::NationalId.contains(term)),
            );

        if let Some(university_id) = university_id {
            query = query.filter(entity::student::Column::UniversityId.eq(university_id));
        }

        let students = query
            .order_by_asc(entity::person::Column::LastName)
            .limit(SEARCH_RESULT_LIMIT)
            .all(self.db)
            .await?;

        self.with_universities(students).await
    }

    /// Computes student counts, optionally within one university
    pub async fn get_stats(&self, university_id: Option<i32>) -> Result<StudentStats, DbErr> {
        let scoped = || {
            let mut query = entity::prelude::Student::find();
            if let Some(university_id) = university_id {
                query = query.filter(entity::student::Column::UniversityId.eq(university_id));
            }
            query
        };

        let total_students = scoped().count(self.db).await?;

        let status_counts: Vec<(StudentStatus, i64)> = scoped()
            .select_only()
            .column(entity::student::Column::Status)
            .column_as(entity::student::Column::Id.count(), "count")
            .group_by(entity::student::Column::Status)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut status_stats: BTreeMap<String, u64> =
            StudentStatus::iter().map(|s| (s.to_value(), 0)).collect();
        for (status, count) in status_counts {
            status_stats.insert(status.to_value(), count as u64);
        }

        let admission_counts: Vec<(Option<AdmissionType>, i64)> = scoped()
            .select_only()
            .column(entity::student::Column::AdmissionType)
            .column_as(entity::student::Column::Id.count(), "count")
            .group_by(entity::student::Column::AdmissionType)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut admission_stats: BTreeMap<String, u64> = AdmissionType::iter()
            .map(|t| t.to_value())
            .chain([UNSPECIFIED_ADMISSION.to_string()])
            .map(|key| (key, 0))
            .collect();
        for (admission_type, count) in admission_counts {
            let key = admission_type
                .map(|t| t.to_value())
                .unwrap_or_else(|| UNSPECIFIED_ADMISSION.to_string());
            admission_stats.insert(key, count as u64);
        }

        let bac_counts: Vec<(i32, i64)> = scoped()
            .select_only()
            .column(entity::student::Column::BaccalaureateYear)
            .column_as(entity::student::Column::Id.count(), "count")
            .filter(entity::student::Column::BaccalaureateYear.is_not_null())
            .group_by(entity::student::Column::BaccalaureateYear)
            .order_by_desc(entity::student::Column::BaccalaureateYear)
            .limit(RECENT_BAC_YEARS)
            .into_tuple()
            .all(self.db)
            .await?;
        let recent_bac_years = bac_counts
            .into_iter()
            .map(|(year, count)| (year, count as u64))
            .collect();

        let active_students = status_stats
            .get(&StudentStatus::Active.to_value())
            .copied()
            .unwrap_or(0);

        Ok(StudentStats {
            total_students,
            active_students,
            status_stats,
            admission_stats,
            recent_bac_years,
        })
    }

    /// Attaches each student's university
    async fn with_universities(
        &self,
        students: Vec<(entity::student::Model, Option<entity::person::Model>)>,
    ) -> Result<Vec<StudentWithRelations>, DbErr> {
        let university_ids: Vec<i32> = students.iter().map(|(s, _)| s.university_id).collect();
        let universities = UniversityRepository::new(self.db)
            .find_by_ids(university_ids)
            .await?;

        Ok(students
            .into_iter()
            .map(|(student, person)| {
                let university = universities.get(&student.university_id).cloned();
                StudentWithRelations {
                    student,
                    person,
                    university,
                }
            })
            .collect())
    }
}

/// Student query restricted by every supplied filter.
fn filtered(filter: &StudentFilter) -> Select<entity::student::Entity> {
    let mut query = entity::prelude::Student::find();

    if let Some(university_id) = filter.university_id {
        query = query.filter(entity::student::Column::UniversityId.eq(university_id));
    }
    if let Some(status) = filter.status {
        query = query.filter(entity::student::Column::Status.eq(status));
    }
    if let Some(admission_type) = filter.admission_type {
        query = query.filter(entity::student::Column::AdmissionType.eq(admission_type));
    }

    query
}
