//! Staff user domain models and parameters.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{PersonType, UserRole, UserStatus};
use sea_orm::ActiveEnum;
use std::collections::BTreeMap;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDetailDto, UserDto, UserStatsDto},
    server::{
        error::AppError,
        model::{
            academic::CourseWithUnit,
            non_blank,
            person::{CreatePersonParams, UpdatePersonParams},
        },
        util::enums::{parse_enum, parse_optional_enum},
    },
};

/// User with its person and university.
#[derive(Debug, Clone)]
pub struct UserWithRelations {
    pub user: entity::user::Model,
    pub person: Option<entity::person::Model>,
    pub university: Option<entity::university::Model>,
}

impl UserWithRelations {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.user.id,
            person_id: self.user.person_id,
            university_id: self.user.university_id,
            employee_id: self.user.employee_id,
            email: self.user.email,
            phone: self.user.phone,
            role: self.user.role.to_value(),
            status: self.user.status.to_value(),
            hire_date: self.user.hire_date,
            created_at: self.user.created_at,
            person: self.person.map(Into::into),
            university: self.university.map(Into::into),
        }
    }
}

/// User with the courses they teach.
#[derive(Debug, Clone)]
pub struct UserDetail {
    pub user: UserWithRelations,
    pub courses: Vec<CourseWithUnit>,
}

impl UserDetail {
    pub fn into_dto(self) -> UserDetailDto {
        UserDetailDto {
            user: self.user.into_dto(),
            courses: self
                .courses
                .into_iter()
                .map(CourseWithUnit::into_dto)
                .collect(),
        }
    }
}

/// Equality filters for the user listing.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub university_id: Option<i32>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

impl UserFilter {
    pub fn new(
        university_id: Option<i32>,
        role: Option<&str>,
        status: Option<&str>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            university_id,
            role: parse_optional_enum::<UserRole>("Role", role)?,
            status: parse_optional_enum::<UserStatus>("Status", status)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub person: CreatePersonParams,
    pub university_id: i32,
    pub employee_id: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    pub hire_date: Option<NaiveDate>,
}

impl CreateUserParams {
    /// Validates a user creation body.
    ///
    /// # Returns
    /// - `Err(AppError::Validation)` - Missing name, university, employee ID, email or role,
    ///   or an unknown role/status literal
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        let phone = dto.person.phone.clone();
        let person = CreatePersonParams::from_fields(PersonType::Staff, dto.person)?;

        let (Some(university_id), Some(employee_id), Some(email), Some(role)) = (
            dto.university_id,
            non_blank(dto.employee_id),
            non_blank(dto.email),
            non_blank(dto.role),
        ) else {
            return Err(AppError::Validation(
                "university_id, employee_id, email, and role are required".to_string(),
            ));
        };

        Ok(Self {
            person,
            university_id,
            employee_id,
            email,
            phone,
            role: parse_enum::<UserRole>("Role", &role)?,
            status: parse_optional_enum::<UserStatus>("Status", dto.status.as_deref())?
                .unwrap_or(UserStatus::Active),
            hire_date: dto.hire_date,
        })
    }
}

/// User attributes to change; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub person: UpdatePersonParams,
    pub university_id: Option<i32>,
    pub employee_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub hire_date: Option<NaiveDate>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        let phone = dto.person.phone.clone();

        Ok(Self {
            person: UpdatePersonParams::from_fields(dto.person)?,
            university_id: dto.university_id,
            employee_id: non_blank(dto.employee_id),
            email: non_blank(dto.email),
            phone,
            role: parse_optional_enum::<UserRole>("Role", dto.role.as_deref())?,
            status: parse_optional_enum::<UserStatus>("Status", dto.status.as_deref())?,
            hire_date: dto.hire_date,
        })
    }
}

/// User counts, optionally scoped to one university.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub total_users: u64,
    pub active_users: u64,
    pub role_stats: BTreeMap<String, u64>,
    pub status_stats: BTreeMap<String, u64>,
}

impl UserStats {
    pub fn into_dto(self) -> UserStatsDto {
        UserStatsDto {
            total_users: self.total_users,
            active_users: self.active_users,
            role_stats: self.role_stats,
            status_stats: self.status_stats,
        }
    }
}
