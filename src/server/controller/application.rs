use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::ApplicationStatus;
use serde::Deserialize;
use serde_json::json;

use crate::{
    model::{
        api::{ApiErrorDto, ApiResponse, StatusUpdateDto},
        application::{ApplicationDto, CreateApplicationDto},
    },
    server::{
        error::{AppError, WriteError},
        model::application::{
            ApplicationFilter, ApplicationWithCompetition, CreateApplicationParams,
        },
        service::application::ApplicationService,
        state::AppState,
        util::enums::parse_required_enum,
    },
};

/// Tag for grouping application endpoints in OpenAPI documentation
pub static APPLICATION_TAG: &str = "application";

#[derive(Deserialize, Default)]
pub struct ApplicationListQuery {
    pub applicant_id: Option<i32>,
    pub competition_id: Option<i32>,
    pub status: Option<String>,
}

/// Get applications matching the optional filters.
///
/// # Returns
/// - `200 OK` - Applications, most recent first
/// - `400 Bad Request` - Unknown status
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    params(
        ("applicant_id" = Option<i32>, Query, description = "Applicant ID"),
        ("competition_id" = Option<i32>, Query, description = "Competition ID"),
        ("status" = Option<String>, Query, description = "Application status")
    ),
    responses(
        (status = 200, description = "Successfully retrieved applications", body = Vec<ApplicationDto>),
        (status = 400, description = "Invalid filter", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_applications(
    State(state): State<AppState>,
    Query(query): Query<ApplicationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = ApplicationFilter::new(
        query.applicant_id,
        query.competition_id,
        query.status.as_deref(),
    )?;

    let applications = ApplicationService::new(&state.db)
        .get_filtered(filter)
        .await?;

    Ok(Json(
        ApiResponse::list(
            applications
                .into_iter()
                .map(ApplicationWithCompetition::into_dto)
                .collect(),
        )
        .with_filters(json!({
            "applicant_id": query.applicant_id,
            "competition_id": query.competition_id,
            "status": query.status,
        })),
    ))
}

#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved application", body = ApplicationDto),
        (status = 404, description = "Application not found", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let application = ApplicationService::new(&state.db).get_by_id(id).await?;

    Ok(Json(ApiResponse::data(application.into_dto())))
}

/// File an application to a competition.
///
/// New applications start out `pending`.
///
/// # Returns
/// - `201 Created` - The created application
/// - `400 Bad Request` - Missing IDs, unknown applicant or competition
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Successfully created application", body = ApplicationDto),
        (status = 400, description = "Invalid application data", body = ApiErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    Json(payload): Json<CreateApplicationDto>,
) -> Result<impl IntoResponse, WriteError> {
    let params = CreateApplicationParams::from_dto(payload)?;

    let application = ApplicationService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::data(application.into_dto())
                .with_message("Application created successfully"),
        ),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted application"),
        (status = 400, description = "Application not found", body = ApiErrorDto)
    ),
)]
pub async fn delete_application(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, WriteError> {
    ApplicationService::new(&state.db).delete(id).await?;

    Ok(Json(ApiResponse::message("Application deleted successfully")))
}

/// Update the status of an application.
///
/// Any of `pending`, `validated`, `rejected` and `selected` can follow any other.
#[utoipa::path(
    patch,
    path = "/api/applications/{id}/status",
    tag = APPLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    request_body = StatusUpdateDto,
    responses(
        (status = 200, description = "Successfully updated status", body = ApplicationDto),
        (status = 400, description = "Invalid status or application not found", body = ApiErrorDto)
    ),
)]
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<StatusUpdateDto>,
) -> Result<impl IntoResponse, WriteError> {
    let status = parse_required_enum::<ApplicationStatus>("Status", payload.status.as_deref())?;

    let application = ApplicationService::new(&state.db)
        .update_status(id, status)
        .await?;

    Ok(Json(ApiResponse::data(application.into_dto())))
}
