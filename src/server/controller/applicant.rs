use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    model::{
        api::{ApiErrorDto, ApiResponse},
        applicant::{
            ApplicantDto, ApplicantStatsDto, ApplicationHistoryDto, CreateApplicantDto,
            MergeApplicantsDto, UpdateApplicantDto,
        },
    },
    server::{
        error::{AppError, WriteError},
        model::applicant::{
            ApplicantWithRelations, CreateApplicantParams, DateWindow, MergeApplicantsParams,
        },
        service::applicant::ApplicantService,
        state::AppState,
    },
};

/// Tag for grouping applicant endpoints in OpenAPI documentation
pub static APPLICANT_TAG: &str = "applicant";

#[derive(Deserialize, Default)]
pub struct ApplicantListQuery {
    pub has_applications: Option<bool>,
}

#[derive(Deserialize, Default)]
pub struct DateRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

fn into_dtos(applicants: Vec<ApplicantWithRelations>) -> Vec<ApplicantDto> {
    applicants
        .into_iter()
        .map(ApplicantWithRelations::into_dto)
        .collect()
}

/// Get applicants, optionally only those with or without applications.
///
/// # Returns
/// - `200 OK` - Applicants, newest first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/applicants",
    tag = APPLICANT_TAG,
    params(
        ("has_applications" = Option<bool>, Query, description = "Keep only applicants with (true) or without (false) applications")
    ),
    responses(
        (status = 200, description = "Successfully retrieved applicants", body = Vec<ApplicantDto>),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_applicants(
    State(state): State<AppState>,
    Query(query): Query<ApplicantListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let applicants = ApplicantService::new(&state.db)
        .get_all(query.has_applications)
        .await?;

    Ok(Json(ApiResponse::list(into_dtos(applicants)).with_filters(
        json!({ "has_applications": query.has_applications }),
    )))
}

/// Get an applicant with its applications.
#[utoipa::path(
    get,
    path = "/api/applicants/{id}",
    tag = APPLICANT_TAG,
    params(
        ("id" = i32, Path, description = "Applicant ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved applicant", body = ApplicantDto),
        (status = 404, description = "Applicant not found", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_applicant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let applicant = ApplicantService::new(&state.db).get_by_id(id).await?;

    Ok(Json(ApiResponse::data(applicant.into_dto())))
}

/// Create an applicant together with its person.
///
/// Requires `first_name`, `last_name` and `national_id`. A fresh application code
/// `APP-<year>-<sequence>` is generated inside the same transaction.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Person fields of the applicant
///
/// # Returns
/// - `201 Created` - The created applicant
/// - `400 Bad Request` - Missing fields, duplicate national ID or email
#[utoipa::path(
    post,
    path = "/api/applicants",
    tag = APPLICANT_TAG,
    request_body = CreateApplicantDto,
    responses(
        (status = 201, description = "Successfully created applicant", body = ApplicantDto),
        (status = 400, description = "Invalid applicant data", body = ApiErrorDto)
    ),
)]
pub async fn create_applicant(
    State(state): State<AppState>,
    Json(payload): Json<CreateApplicantDto>,
) -> Result<impl IntoResponse, WriteError> {
    let params = CreateApplicantParams::from_dto(payload)?;

    let applicant = ApplicantService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::data(applicant.into_dto()).with_message("Applicant created successfully"),
        ),
    ))
}

/// Update an applicant's application code.
#[utoipa::path(
    put,
    path = "/api/applicants/{id}",
    tag = APPLICANT_TAG,
    params(
        ("id" = i32, Path, description = "Applicant ID")
    ),
    request_body = UpdateApplicantDto,
    responses(
        (status = 200, description = "Successfully updated applicant", body = ApplicantDto),
        (status = 400, description = "Applicant not found or code already used", body = ApiErrorDto)
    ),
)]
pub async fn update_applicant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateApplicantDto>,
) -> Result<impl IntoResponse, WriteError> {
    let applicant = ApplicantService::new(&state.db)
        .update(id, payload.application_code)
        .await?;

    Ok(Json(
        ApiResponse::data(applicant.into_dto()).with_message("Applicant updated successfully"),
    ))
}

/// Delete an applicant and its person.
///
/// # Returns
/// - `200 OK` - Applicant deleted
/// - `400 Bad Request` - Applicant not found or has applications
#[utoipa::path(
    delete,
    path = "/api/applicants/{id}",
    tag = APPLICANT_TAG,
    params(
        ("id" = i32, Path, description = "Applicant ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted applicant"),
        (status = 400, description = "Applicant not found or has applications", body = ApiErrorDto)
    ),
)]
pub async fn delete_applicant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, WriteError> {
    ApplicantService::new(&state.db).delete(id).await?;

    Ok(Json(ApiResponse::message("Applicant deleted successfully")))
}

/// Get an applicant by application code.
#[utoipa::path(
    get,
    path = "/api/applicants/code/{code}",
    tag = APPLICANT_TAG,
    params(
        ("code" = String, Path, description = "Application code")
    ),
    responses(
        (status = 200, description = "Successfully retrieved applicant", body = ApplicantDto),
        (status = 404, description = "Applicant not found", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_applicant_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let applicant = ApplicantService::new(&state.db).get_by_code(&code).await?;

    Ok(Json(ApiResponse::data(applicant.into_dto())))
}

/// Get the applicant record of a person.
#[utoipa::path(
    get,
    path = "/api/applicants/person/{person_id}",
    tag = APPLICANT_TAG,
    params(
        ("person_id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved applicant", body = ApplicantDto),
        (status = 404, description = "Applicant not found for this person", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_applicant_by_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let applicant = ApplicantService::new(&state.db)
        .get_by_person_id(person_id)
        .await?;

    Ok(Json(ApiResponse::data(applicant.into_dto())))
}

/// Search applicants by name, national ID, personal email or application code.
#[utoipa::path(
    get,
    path = "/api/applicants/search/{term}",
    tag = APPLICANT_TAG,
    params(
        ("term" = String, Path, description = "Search term, at least 2 characters")
    ),
    responses(
        (status = 200, description = "Matching applicants", body = Vec<ApplicantDto>),
        (status = 400, description = "Search term too short", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn search_applicants(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let applicants = ApplicantService::new(&state.db).search(&term).await?;

    Ok(Json(
        ApiResponse::list(into_dtos(applicants)).with_search_term(term),
    ))
}

/// Get applicants with pending applications to open competitions.
///
/// Only the active applications are included for each applicant.
#[utoipa::path(
    get,
    path = "/api/applicants/active/applications",
    tag = APPLICANT_TAG,
    responses(
        (status = 200, description = "Applicants with active applications", body = Vec<ApplicantDto>),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_applicants_with_active_applications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let applicants = ApplicantService::new(&state.db)
        .get_with_active_applications()
        .await?;

    Ok(Json(ApiResponse::list(into_dtos(applicants))))
}

/// Get applicants created within a date window.
///
/// # Arguments
/// - `query` - `start_date` and `end_date`, each `YYYY-MM-DD` or an RFC 3339 timestamp.
///   A plain end date covers the whole day.
///
/// # Returns
/// - `200 OK` - Applicants in creation order, with the period echoed back
/// - `400 Bad Request` - Missing or malformed date
#[utoipa::path(
    get,
    path = "/api/applicants/by-date",
    tag = APPLICANT_TAG,
    params(
        ("start_date" = String, Query, description = "Start of the window"),
        ("end_date" = String, Query, description = "End of the window, inclusive")
    ),
    responses(
        (status = 200, description = "Applicants created in the window", body = Vec<ApplicantDto>),
        (status = 400, description = "Invalid date window", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_applicants_by_date(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let window = DateWindow::parse(query.start_date, query.end_date)?;

    let applicants = ApplicantService::new(&state.db)
        .get_created_between(&window)
        .await?;

    Ok(Json(
        ApiResponse::list(into_dtos(applicants)).with_period(window.period),
    ))
}

/// Get applicant counts and the monthly creation trend.
#[utoipa::path(
    get,
    path = "/api/applicants/stats/overview",
    tag = APPLICANT_TAG,
    responses(
        (status = 200, description = "Applicant statistics", body = ApplicantStatsDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_applicant_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let stats = ApplicantService::new(&state.db).get_stats().await?;

    Ok(Json(ApiResponse::data(stats.into_dto())))
}

/// Get an applicant with per-status counts of their applications.
#[utoipa::path(
    get,
    path = "/api/applicants/{id}/application-history",
    tag = APPLICANT_TAG,
    params(
        ("id" = i32, Path, description = "Applicant ID")
    ),
    responses(
        (status = 200, description = "Application history", body = ApplicationHistoryDto),
        (status = 404, description = "Applicant not found", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_application_history(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let history = ApplicantService::new(&state.db)
        .get_application_history(id)
        .await?;

    Ok(Json(ApiResponse::data(history.into_dto())))
}

/// Merge one applicant into another.
///
/// Every application of the source moves to the target, then the source applicant
/// and its person are deleted, all in one transaction.
///
/// # Returns
/// - `200 OK` - The target applicant after the merge
/// - `400 Bad Request` - IDs missing or equal, or either applicant not found
#[utoipa::path(
    post,
    path = "/api/applicants/merge",
    tag = APPLICANT_TAG,
    request_body = MergeApplicantsDto,
    responses(
        (status = 200, description = "Successfully merged applicants", body = ApplicantDto),
        (status = 400, description = "Invalid merge", body = ApiErrorDto)
    ),
)]
pub async fn merge_applicants(
    State(state): State<AppState>,
    Json(payload): Json<MergeApplicantsDto>,
) -> Result<impl IntoResponse, WriteError> {
    let params = MergeApplicantsParams::from_dto(payload)?;

    let applicant = ApplicantService::new(&state.db).merge(params).await?;

    Ok(Json(
        ApiResponse::data(applicant.into_dto()).with_message("Applicants merged successfully"),
    ))
}

/// Assign a newly generated application code to an applicant.
#[utoipa::path(
    post,
    path = "/api/applicants/{id}/generate-code",
    tag = APPLICANT_TAG,
    params(
        ("id" = i32, Path, description = "Applicant ID")
    ),
    responses(
        (status = 200, description = "Successfully regenerated code", body = ApplicantDto),
        (status = 400, description = "Applicant not found", body = ApiErrorDto)
    ),
)]
pub async fn regenerate_application_code(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, WriteError> {
    let applicant = ApplicantService::new(&state.db).regenerate_code(id).await?;

    Ok(Json(
        ApiResponse::data(applicant.into_dto())
            .with_message("Application code regenerated successfully"),
    ))
}
