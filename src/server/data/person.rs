use entity::sea_orm_active_enums::PersonType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashSet;

use crate::server::{
    data::university::UniversityRepository,
    model::person::{CreatePersonParams, PersonWithRoles, UpdatePersonParams},
    util::search::SEARCH_RESULT_LIMIT,
};

pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::person::Model>, DbErr> {
        entity::prelude::Person::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_national_id(
        &self,
        national_id: &str,
    ) -> Result<Option<entity::person::Model>, DbErr> {
        entity::prelude::Person::find()
            .filter(entity::person::Column::NationalId.eq(national_id))
            .one(self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::person::Model>, DbErr> {
        entity::prelude::Person::find()
            .filter(entity::person::Column::PersonalEmail.eq(email))
            .one(self.db)
            .await
    }

    /// Checks whether another person already uses `national_id`
    pub async fn national_id_taken(
        &self,
        national_id: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Person::find()
            .filter(entity::person::Column::NationalId.eq(national_id));

        if let Some(id) = exclude_id {
            query = query.filter(entity::person::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether another person already uses `email` as personal email
    pub async fn email_taken(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Person::find()
            .filter(entity::person::Column::PersonalEmail.eq(email));

        if let Some(id) = exclude_id {
            query = query.filter(entity::person::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(&self, params: CreatePersonParams) -> Result<entity::person::Model, DbErr> {
        entity::person::ActiveModel {
            person_type: ActiveValue::Set(params.person_type),
            national_id: ActiveValue::Set(params.national_id),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            birth_date: ActiveValue::Set(params.birth_date),
            birth_place: ActiveValue::Set(params.birth_place),
            nationality: ActiveValue::Set(params.nationality),
            address: ActiveValue::Set(params.address),
            phone: ActiveValue::Set(params.phone),
            personal_email: ActiveValue::Set(params.personal_email),
            gender: ActiveValue::Set(params.gender),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates the supplied fields of a person
    ///
    /// Returns `None` if the person doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: UpdatePersonParams,
    ) -> Result<Option<entity::person::Model>, DbErr> {
        let Some(person) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        if params.is_empty() {
            return Ok(Some(person));
        }

        let mut am = person.into_active_model();
        if let Some(first_name) = params.first_name {
            am.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            am.last_name = ActiveValue::Set(last_name);
        }
        if params.national_id.is_some() {
            am.national_id = ActiveValue::Set(params.national_id);
        }
        if params.birth_date.is_some() {
            am.birth_date = ActiveValue::Set(params.birth_date);
        }
        if params.birth_place.is_some() {
            am.birth_place = ActiveValue::Set(params.birth_place);
        }
        if params.nationality.is_some() {
            am.nationality = ActiveValue::Set(params.nationality);
        }
        if params.address.is_some() {
            am.address = ActiveValue::Set(params.address);
        }
        if params.phone.is_some() {
            am.phone = ActiveValue::Set(params.phone);
        }
        if params.personal_email.is_some() {
            am.personal_email = ActiveValue::Set(params.personal_email);
        }
        if params.gender.is_some() {
            am.gender = ActiveValue::Set(params.gender);
        }

        Ok(Some(am.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Person::delete_by_id(id).exec(self.db).await
    }

    /// Searches persons by name, national ID or personal email
    ///
    /// Results are ordered by last name then first name and capped at the search limit.
    pub async fn search(
        &self,
        term: &str,
        person_type: Option<PersonType>,
    ) -> Result<Vec<entity::person::Model>, DbErr> {
        let mut query = entity::prelude::Person::find().filter(
            Condition::any()
                .add(entity::person::Column::FirstName.contains(term))
                .add(entity::person::Column::LastName.contains(term))
                .add(entity::person::Column::NationalId.contains(term))
                .add(entity::person::Column::PersonalEmail.contains(term)),
        );

        if let Some(person_type) = person_type {
            query = query.filter(entity::person::Column::PersonType.eq(person_type));
        }

        query
            .order_by_asc(entity::person::Column::LastName)
            .order_by_asc(entity::person::Column::FirstName)
            .limit(SEARCH_RESULT_LIMIT)
            .all(self.db)
            .await
    }

    /// Gets persons holding both a staff account and a student record
    pub async fn find_with_multiple_roles(&self) -> Result<Vec<entity::person::Model>, DbErr> {
        let staff_person_ids: HashSet<i32> = entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::PersonId)
            .into_tuple::<i32>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        let person_ids: Vec<i32> = entity::prelude::Student::find()
            .select_only()
            .column(entity::student::Column::PersonId)
            .into_tuple::<i32>()
            .all(self.db)
            .await?
            .into_iter()
            .filter(|id| staff_person_ids.contains(id))
            .collect();

        if person_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Person::find()
            .filter(entity::person::Column::Id.is_in(person_ids))
            .order_by_asc(entity::person::Column::LastName)
            .order_by_asc(entity::person::Column::FirstName)
            .all(self.db)
            .await
    }

    /// Loads every role row held by `person`
    pub async fn get_roles(&self, person: entity::person::Model) -> Result<PersonWithRoles, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::PersonId.eq(person.id))
            .one(self.db)
            .await?;

        let student = entity::prelude::Student::find()
            .filter(entity::student::Column::PersonId.eq(person.id))
            .one(self.db)
            .await?;

        let applicant = entity::prelude::Applicant::find()
            .filter(entity::applicant::Column::PersonId.eq(person.id))
            .one(self.db)
            .await?;

        let university_ids: Vec<i32> = user
            .iter()
            .map(|u| u.university_id)
            .chain(student.iter().map(|s| s.university_id))
            .collect();
        let universities = UniversityRepository::new(self.db)
            .find_by_ids(university_ids)
            .await?;

        let applicant = match applicant {
            Some(applicant) => {
                let count = entity::prelude::Application::find()
                    .filter(entity::application::Column::ApplicantId.eq(applicant.id))
                    .count(self.db)
                    .await?;
                Some((applicant, count))
            }
            None => None,
        };

        Ok(PersonWithRoles {
            person,
            user: user.map(|u| {
                let university = universities.get(&u.university_id).cloned();
                (u, university)
            }),
            student: student.map(|s| {
                let university = universities.get(&s.university_id).cloned();
                (s, university)
            }),
            applicant,
        })
    }
}
