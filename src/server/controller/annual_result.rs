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
        annual_result::{
            AnnualResultDetailDto, AnnualResultStatsDto, CalculateAnnualResultDto,
            CalculatedAnnualResultDto, CreateAnnualResultDto, StudentAnnualSummaryDto,
            UpdateAnnualResultDto,
        },
        api::{ApiErrorDto, ApiResponse},
    },
    server::{
        error::{AppError, WriteError},
        model::annual_result::{
            AnnualResultFilter, AnnualResultRecord, CreateAnnualResultParams,
            UpdateAnnualResultParams,
        },
        service::annual_result::AnnualResultService,
        state::AppState,
    },
};

/// Tag for grouping annual result endpoints in OpenAPI documentation
pub static ANNUAL_RESULT_TAG: &str = "annual-result";

#[derive(Deserialize, Default)]
pub struct AnnualResultListQuery {
    pub academic_year: Option<String>,
    pub board_decision: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct SpecializationQuery {
    pub specialization_id: Option<i32>,
}

fn into_dtos(results: Vec<AnnualResultRecord>) -> Vec<AnnualResultDetailDto> {
    results
        .into_iter()
        .map(AnnualResultRecord::into_dto)
        .collect()
}

fn required_registration(dto: CalculateAnnualResultDto) -> Result<i32, AppError> {
    dto.registration_id
        .ok_or_else(|| AppError::Validation("registration_id is required".to_string()))
}

/// Get annual results matching the optional filters.
///
/// # Returns
/// - `200 OK` - Results, latest academic year then best average first
/// - `400 Bad Request` - Malformed academic year or unknown board decision
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/annual-results",
    tag = ANNUAL_RESULT_TAG,
    params(
        ("academic_year" = Option<String>, Query, description = "Academic year, e.g. 2024-2025"),
        ("board_decision" = Option<String>, Query, description = "Board decision")
    ),
    responses(
        (status = 200, description = "Successfully retrieved annual results", body = Vec<AnnualResultDetailDto>),
        (status = 400, description = "Invalid filter", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_annual_results(
    State(state): State<AppState>,
    Query(query): Query<AnnualResultListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = AnnualResultFilter::new(
        query.academic_year.as_deref(),
        query.board_decision.as_deref(),
    )?;

    let results = AnnualResultService::new(&state.db)
        .get_filtered(filter)
        .await?;

    Ok(Json(ApiResponse::list(into_dtos(results)).with_filters(
        json!({
            "academic_year": query.academic_year,
            "board_decision": query.board_decision,
        }),
    )))
}

#[utoipa::path(
    get,
    path = "/api/annual-results/{id}",
    tag = ANNUAL_RESULT_TAG,
    params(
        ("id" = i32, Path, description = "Annual result ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved annual result", body = AnnualResultDetailDto),
        (status = 404, description = "Annual result not found", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_annual_result(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let result = AnnualResultService::new(&state.db).get_by_id(id).await?;

    Ok(Json(ApiResponse::data(result.into_dto())))
}

/// Record the annual result of a registration.
///
/// # Returns
/// - `201 Created` - The created result, academic year taken from the registration
/// - `400 Bad Request` - Invalid fields, unknown registration or a result already recorded
#[utoipa::path(
    post,
    path = "/api/annual-results",
    tag = ANNUAL_RESULT_TAG,
    request_body = CreateAnnualResultDto,
    responses(
        (status = 201, description = "Successfully created annual result", body = AnnualResultDetailDto),
        (status = 400, description = "Invalid annual result data", body = ApiErrorDto)
    ),
)]
pub async fn create_annual_result(
    State(state): State<AppState>,
    Json(payload): Json<CreateAnnualResultDto>,
) -> Result<impl IntoResponse, WriteError> {
    let params = CreateAnnualResultParams::from_dto(payload)?;

    let result = AnnualResultService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::data(result.into_dto())
                .with_message("Annual result created successfully"),
        ),
    ))
}

#[utoipa::path(
    put,
    path = "/api/annual-results/{id}",
    tag = ANNUAL_RESULT_TAG,
    params(
        ("id" = i32, Path, description = "Annual result ID")
    ),
    request_body = UpdateAnnualResultDto,
    responses(
        (status = 200, description = "Successfully updated annual result", body = AnnualResultDetailDto),
        (status = 400, description = "Invalid data or annual result not found", body = ApiErrorDto)
    ),
)]
pub async fn update_annual_result(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAnnualResultDto>,
) -> Result<impl IntoResponse, WriteError> {
    let params = UpdateAnnualResultParams::from_dto(payload)?;

    let result = AnnualResultService::new(&state.db)
        .update(id, params)
        .await?;

    Ok(Json(
        ApiResponse::data(result.into_dto()).with_message("Annual result updated successfully"),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/annual-results/{id}",
    tag = ANNUAL_RESULT_TAG,
    params(
        ("id" = i32, Path, description = "Annual result ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted annual result"),
        (status = 400, description = "Annual result not found", body = ApiErrorDto)
    ),
)]
pub async fn delete_annual_result(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, WriteError> {
    AnnualResultService::new(&state.db).delete(id).await?;

    Ok(Json(ApiResponse::message("Annual result deleted successfully")))
}

#[utoipa::path(
    get,
    path = "/api/annual-results/registration/{registration_id}",
    tag = ANNUAL_RESULT_TAG,
    params(
        ("registration_id" = i32, Path, description = "Registration ID")
    ),
    responses(
        (status = 200, description = "Annual results of the registration", body = Vec<AnnualResultDetailDto>),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_annual_results_by_registration(
    State(state): State<AppState>,
    Path(registration_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let results = AnnualResultService::new(&state.db)
        .get_by_registration(registration_id)
        .await?;

    Ok(Json(ApiResponse::list(into_dtos(results))))
}

/// Get every annual result of a student, latest academic year first.
#[utoipa::path(
    get,
    path = "/api/annual-results/student/{student_id}",
    tag = ANNUAL_RESULT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Annual results of the student", body = Vec<AnnualResultDetailDto>),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_annual_results_by_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let results = AnnualResultService::new(&state.db)
        .get_by_student(student_id)
        .await?;

    Ok(Json(ApiResponse::list(into_dtos(results))))
}

/// Get the annual results of an academic year, best average first.
#[utoipa::path(
    get,
    path = "/api/annual-results/year/{academic_year}",
    tag = ANNUAL_RESULT_TAG,
    params(
        ("academic_year" = String, Path, description = "Academic year, e.g. 2024-2025")
    ),
    responses(
        (status = 200, description = "Annual results of the year", body = Vec<AnnualResultDetailDto>),
        (status = 400, description = "Malformed academic year", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_annual_results_by_year(
    State(state): State<AppState>,
    Path(academic_year): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let results = AnnualResultService::new(&state.db)
        .get_by_year(&academic_year)
        .await?;

    Ok(Json(ApiResponse::list(into_dtos(results))))
}

/// Get the class ranking of an academic year.
///
/// # Returns
/// - `200 OK` - Ranked results by rank, unranked results last
/// - `400 Bad Request` - Malformed academic year
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/annual-results/ranking/{academic_year}",
    tag = ANNUAL_RESULT_TAG,
    params(
        ("academic_year" = String, Path, description = "Academic year, e.g. 2024-2025"),
        ("specialization_id" = Option<i32>, Query, description = "Restrict to one specialization")
    ),
    responses(
        (status = 200, description = "Class ranking", body = Vec<AnnualResultDetailDto>),
        (status = 400, description = "Malformed academic year", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_class_ranking(
    State(state): State<AppState>,
    Path(academic_year): Path<String>,
    Query(query): Query<SpecializationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let results = AnnualResultService::new(&state.db)
        .get_ranking(&academic_year, query.specialization_id)
        .await?;

    Ok(Json(ApiResponse::list(into_dtos(results)).with_filters(
        json!({
            "academic_year": academic_year,
            "specialization_id": query.specialization_id,
        }),
    )))
}

/// Recompute the class ranking of an academic year.
///
/// Each cohort (specialization and study level) is ranked by annual average; results
/// without an average lose their rank.
#[utoipa::path(
    post,
    path = "/api/annual-results/ranking/{academic_year}/update",
    tag = ANNUAL_RESULT_TAG,
    params(
        ("academic_year" = String, Path, description = "Academic year, e.g. 2024-2025"),
        ("specialization_id" = Option<i32>, Query, description = "Restrict to one specialization")
    ),
    responses(
        (status = 200, description = "Updated class ranking", body = Vec<AnnualResultDetailDto>),
        (status = 400, description = "Malformed academic year", body = ApiErrorDto)
    ),
)]
pub async fn update_class_ranking(
    State(state): State<AppState>,
    Path(academic_year): Path<String>,
    Query(query): Query<SpecializationQuery>,
) -> Result<impl IntoResponse, WriteError> {
    let results = AnnualResultService::new(&state.db)
        .update_ranking(&academic_year, query.specialization_id)
        .await?;

    Ok(Json(
        ApiResponse::list(into_dtos(results)).with_message("Class ranking updated successfully"),
    ))
}

#[utoipa::path(
    get,
    path = "/api/annual-results/stats/{academic_year}",
    tag = ANNUAL_RESULT_TAG,
    params(
        ("academic_year" = String, Path, description = "Academic year, e.g. 2024-2025")
    ),
    responses(
        (status = 200, description = "Statistics of the year", body = AnnualResultStatsDto),
        (status = 400, description = "Malformed academic year", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_annual_stats(
    State(state): State<AppState>,
    Path(academic_year): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let stats = AnnualResultService::new(&state.db)
        .get_stats(&academic_year)
        .await?;

    Ok(Json(ApiResponse::data(stats.into_dto())))
}

/// Summarize a student's annual results across years.
#[utoipa::path(
    get,
    path = "/api/annual-results/student/{student_id}/summary",
    tag = ANNUAL_RESULT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Summary of the student's annual results", body = StudentAnnualSummaryDto),
        (status = 404, description = "Student not found", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_student_annual_summary(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let summary = AnnualResultService::new(&state.db)
        .get_student_summary(student_id)
        .await?;

    Ok(Json(ApiResponse::data(summary.into_dto())))
}

/// Calculate a registration's annual result from its grades without storing it.
#[utoipa::path(
    post,
    path = "/api/annual-results/calculate",
    tag = ANNUAL_RESULT_TAG,
    request_body = CalculateAnnualResultDto,
    responses(
        (status = 200, description = "Calculated annual result", body = CalculatedAnnualResultDto),
        (status = 400, description = "Missing or unknown registration", body = ApiErrorDto)
    ),
)]
pub async fn calculate_annual_result(
    State(state): State<AppState>,
    Json(payload): Json<CalculateAnnualResultDto>,
) -> Result<impl IntoResponse, WriteError> {
    let registration_id = required_registration(payload)?;

    let calculated = AnnualResultService::new(&state.db)
        .calculate(registration_id)
        .await?;

    Ok(Json(ApiResponse::data(calculated.into_dto())))
}

/// Calculate and store a registration's annual result.
///
/// # Returns
/// - `201 Created` - The registration had no result yet
/// - `200 OK` - The existing result was recalculated, its ranking kept
/// - `400 Bad Request` - Missing or unknown registration
#[utoipa::path(
    post,
    path = "/api/annual-results/generate",
    tag = ANNUAL_RESULT_TAG,
    request_body = CalculateAnnualResultDto,
    responses(
        (status = 201, description = "Annual result created", body = AnnualResultDetailDto),
        (status = 200, description = "Annual result recalculated", body = AnnualResultDetailDto),
        (status = 400, description = "Missing or unknown registration", body = ApiErrorDto)
    ),
)]
pub async fn generate_annual_result(
    State(state): State<AppState>,
    Json(payload): Json<CalculateAnnualResultDto>,
) -> Result<impl IntoResponse, WriteError> {
    let registration_id = required_registration(payload)?;

    let (result, created) = AnnualResultService::new(&state.db)
        .generate(registration_id)
        .await?;

    let (status, message) = if created {
        (StatusCode::CREATED, "Annual result created successfully")
    } else {
        (StatusCode::OK, "Annual result updated successfully")
    };

    Ok((
        status,
        Json(ApiResponse::data(result.into_dto()).with_message(message)),
    ))
}
