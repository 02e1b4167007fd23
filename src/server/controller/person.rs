use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::PersonType;
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiErrorDto, ApiResponse},
        person::{CreatePersonDto, PersonDetailDto, PersonDto, PersonFieldsDto},
    },
    server::{
        error::{AppError, WriteError},
        model::person::{CreatePersonParams, PersonWithRoles, UpdatePersonParams},
        service::person::PersonService,
        state::AppState,
        util::enums::parse_optional_enum,
    },
};

/// Tag for grouping person endpoints in OpenAPI documentation
pub static PERSON_TAG: &str = "person";

#[derive(Deserialize, Default)]
pub struct PersonSearchQuery {
    pub person_type: Option<String>,
}

/// Create a standalone person.
///
/// # Returns
/// - `201 Created` - The created person with its (empty) roles
/// - `400 Bad Request` - Missing fields, invalid type or gender, duplicate national ID or email
#[utoipa::path(
    post,
    path = "/api/persons",
    tag = PERSON_TAG,
    request_body = CreatePersonDto,
    responses(
        (status = 201, description = "Successfully created person", body = PersonDetailDto),
        (status = 400, description = "Invalid person data", body = ApiErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    Json(payload): Json<CreatePersonDto>,
) -> Result<impl IntoResponse, WriteError> {
    let params = CreatePersonParams::from_dto(payload)?;

    let person = PersonService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(person.into_dto()).with_message("Person created successfully")),
    ))
}

/// Get a person with its roles.
#[utoipa::path(
    get,
    path = "/api/persons/{id}",
    tag = PERSON_TAG,
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved person", body = PersonDetailDto),
        (status = 404, description = "Person not found", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let person = PersonService::new(&state.db).get_by_id(id).await?;

    Ok(Json(ApiResponse::data(person.into_dto())))
}

/// Update a person's identity fields.
///
/// # Returns
/// - `200 OK` - The updated person
/// - `400 Bad Request` - Person not found, invalid gender, duplicate national ID or email
#[utoipa::path(
    put,
    path = "/api/persons/{id}",
    tag = PERSON_TAG,
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    request_body = PersonFieldsDto,
    responses(
        (status = 200, description = "Successfully updated person", body = PersonDetailDto),
        (status = 400, description = "Invalid person data", body = ApiErrorDto)
    ),
)]
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PersonFieldsDto>,
) -> Result<impl IntoResponse, WriteError> {
    let params = UpdatePersonParams::from_fields(payload)?;

    let person = PersonService::new(&state.db).update(id, params).await?;

    Ok(Json(
        ApiResponse::data(person.into_dto()).with_message("Person updated successfully"),
    ))
}

/// Get a person by national ID.
#[utoipa::path(
    get,
    path = "/api/persons/national-id/{national_id}",
    tag = PERSON_TAG,
    params(
        ("national_id" = String, Path, description = "National ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved person", body = PersonDetailDto),
        (status = 404, description = "Person not found", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_person_by_national_id(
    State(state): State<AppState>,
    Path(national_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let person = PersonService::new(&state.db)
        .get_by_national_id(&national_id)
        .await?;

    Ok(Json(ApiResponse::data(person.into_dto())))
}

/// Get a person by personal email.
#[utoipa::path(
    get,
    path = "/api/persons/email/{email}",
    tag = PERSON_TAG,
    params(
        ("email" = String, Path, description = "Personal email")
    ),
    responses(
        (status = 200, description = "Successfully retrieved person", body = PersonDetailDto),
        (status = 404, description = "Person not found", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_person_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let person = PersonService::new(&state.db).get_by_email(&email).await?;

    Ok(Json(ApiResponse::data(person.into_dto())))
}

/// Search persons by name, national ID or personal email.
///
/// # Arguments
/// - `term` - At least 2 characters, matched as a substring
/// - `query` - Optional `person_type` restricting the result
///
/// # Returns
/// - `200 OK` - Up to 50 persons ordered by last name, then first name
/// - `400 Bad Request` - Term too short or unknown person type
#[utoipa::path(
    get,
    path = "/api/persons/search/{term}",
    tag = PERSON_TAG,
    params(
        ("term" = String, Path, description = "Search term, at least 2 characters"),
        ("person_type" = Option<String>, Query, description = "student, staff or applicant")
    ),
    responses(
        (status = 200, description = "Matching persons", body = Vec<PersonDto>),
        (status = 400, description = "Invalid search", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn search_persons(
    State(state): State<AppState>,
    Path(term): Path<String>,
    Query(query): Query<PersonSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let person_type =
        parse_optional_enum::<PersonType>("Person type", query.person_type.as_deref())?;

    let persons = PersonService::new(&state.db)
        .search(&term, person_type)
        .await?;

    Ok(Json(
        ApiResponse::list(persons.into_iter().map(PersonDto::from).collect())
            .with_search_term(term),
    ))
}

/// Get persons holding both a staff account and a student record.
#[utoipa::path(
    get,
    path = "/api/persons/multiple-roles",
    tag = PERSON_TAG,
    responses(
        (status = 200, description = "Persons with several roles", body = Vec<PersonDetailDto>),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_persons_with_multiple_roles(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let persons = PersonService::new(&state.db)
        .get_with_multiple_roles()
        .await?;

    Ok(Json(ApiResponse::list(
        persons
            .into_iter()
            .map(PersonWithRoles::into_dto)
            .collect(),
    )))
}
