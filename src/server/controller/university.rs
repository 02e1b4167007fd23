use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::UniversityStatus;

use crate::{
    model::{
        api::{ErrorDto, StatusUpdateDto},
        university::{CreateUniversityDto, UniversityDto, UniversityStatsDto, UpdateUniversityDto},
    },
    server::{
        error::{UniversityError, UniversityWriteError},
        model::university::{CreateUniversityParams, UpdateUniversityParams},
        service::university::UniversityService,
        state::AppState,
        util::enums::parse_required_enum,
    },
};

/// Tag for grouping university endpoints in OpenAPI documentation
pub static UNIVERSITY_TAG: &str = "university";

/// Get all universities.
///
/// Returns every university ordered by name. Unlike the other resources, university
/// endpoints respond with bare JSON bodies rather than the response envelope.
///
/// # Returns
/// - `200 OK` - List of universities
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/universities",
    tag = UNIVERSITY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved universities", body = Vec<UniversityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_universities(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, UniversityError> {
    let universities = UniversityService::new(&state.db).get_all().await?;

    Ok(Json(
        universities
            .into_iter()
            .map(UniversityDto::from)
            .collect::<Vec<_>>(),
    ))
}

/// Get a university by ID.
///
/// # Returns
/// - `200 OK` - The university
/// - `404 Not Found` - University does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/universities/{id}",
    tag = UNIVERSITY_TAG,
    params(
        ("id" = i32, Path, description = "University ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved university", body = UniversityDto),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_university(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, UniversityError> {
    let university = UniversityService::new(&state.db).get_by_id(id).await?;

    Ok(Json(UniversityDto::from(university)))
}

/// Create a university.
///
/// Requires `code` and `name`. The code must not be used by another university.
/// The status defaults to `pending`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - University fields
///
/// # Returns
/// - `201 Created` - The created university
/// - `400 Bad Request` - Missing fields, invalid status or duplicate code
#[utoipa::path(
    post,
    path = "/api/universities",
    tag = UNIVERSITY_TAG,
    request_body = CreateUniversityDto,
    responses(
        (status = 201, description = "Successfully created university", body = UniversityDto),
        (status = 400, description = "Invalid university data", body = ErrorDto)
    ),
)]
pub async fn create_university(
    State(state): State<AppState>,
    Json(payload): Json<CreateUniversityDto>,
) -> Result<impl IntoResponse, UniversityWriteError> {
    let params = CreateUniversityParams::from_dto(payload)?;

    let university = UniversityService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(UniversityDto::from(university))))
}

/// Update a university.
///
/// Only supplied fields are changed.
///
/// # Returns
/// - `200 OK` - The updated university
/// - `400 Bad Request` - University not found or duplicate code
#[utoipa::path(
    put,
    path = "/api/universities/{id}",
    tag = UNIVERSITY_TAG,
    params(
        ("id" = i32, Path, description = "University ID")
    ),
    request_body = UpdateUniversityDto,
    responses(
        (status = 200, description = "Successfully updated university", body = UniversityDto),
        (status = 400, description = "Invalid university data", body = ErrorDto)
    ),
)]
pub async fn update_university(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUniversityDto>,
) -> Result<impl IntoResponse, UniversityWriteError> {
    let params = UpdateUniversityParams::from_dto(payload);

    let university = UniversityService::new(&state.db).update(id, params).await?;

    Ok(Json(UniversityDto::from(university)))
}

/// Delete a university.
///
/// Blocked while users, students, programs, competitions or news reference it.
///
/// # Returns
/// - `204 No Content` - University deleted
/// - `400 Bad Request` - University not found or still referenced
#[utoipa::path(
    delete,
    path = "/api/universities/{id}",
    tag = UNIVERSITY_TAG,
    params(
        ("id" = i32, Path, description = "University ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted university"),
        (status = 400, description = "University not found or still referenced", body = ErrorDto)
    ),
)]
pub async fn delete_university(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, UniversityWriteError> {
    UniversityService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get statistics for a university.
///
/// # Returns
/// - `200 OK` - Student, user, program, competition and news counts
/// - `404 Not Found` - University does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/universities/{id}/stats",
    tag = UNIVERSITY_TAG,
    params(
        ("id" = i32, Path, description = "University ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved statistics", body = UniversityStatsDto),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_university_stats(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, UniversityError> {
    let stats = UniversityService::new(&state.db).get_stats(id).await?;

    Ok(Json(stats.into_dto()))
}

/// Update the status of a university.
///
/// # Returns
/// - `200 OK` - The updated university
/// - `400 Bad Request` - Status missing or not one of `active`, `inactive`, `pending`,
///   or university not found
#[utoipa::path(
    patch,
    path = "/api/universities/{id}/status",
    tag = UNIVERSITY_TAG,
    params(
        ("id" = i32, Path, description = "University ID")
    ),
    request_body = StatusUpdateDto,
    responses(
        (status = 200, description = "Successfully updated status", body = UniversityDto),
        (status = 400, description = "Invalid status", body = ErrorDto)
    ),
)]
pub async fn update_university_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<StatusUpdateDto>,
) -> Result<impl IntoResponse, UniversityWriteError> {
    let status = parse_required_enum::<UniversityStatus>("Status", payload.status.as_deref())?;

    let university = UniversityService::new(&state.db)
        .update_status(id, status)
        .await?;

    Ok(Json(UniversityDto::from(university)))
}
