use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::CompetitionStatus;
use serde::Deserialize;
use serde_json::json;

use crate::{
    model::{
        api::{ApiErrorDto, ApiResponse, StatusUpdateDto},
        competition::{CompetitionDto, CreateCompetitionDto, UpdateCompetitionDto},
    },
    server::{
        error::{AppError, WriteError},
        model::competition::{
            CompetitionFilter, CompetitionWithUniversity, CreateCompetitionParams,
            UpdateCompetitionParams,
        },
        service::competition::CompetitionService,
        state::AppState,
        util::enums::parse_required_enum,
    },
};

/// Tag for grouping competition endpoints in OpenAPI documentation
pub static COMPETITION_TAG: &str = "competition";

#[derive(Deserialize, Default)]
pub struct CompetitionListQuery {
    pub university_id: Option<i32>,
    pub status: Option<String>,
    pub competition_type: Option<String>,
}

/// Get competitions matching the optional filters.
///
/// # Returns
/// - `200 OK` - Competitions, latest closing date first
/// - `400 Bad Request` - Unknown status or competition type
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/competitions",
    tag = COMPETITION_TAG,
    params(
        ("university_id" = Option<i32>, Query, description = "University ID"),
        ("status" = Option<String>, Query, description = "Competition status"),
        ("competition_type" = Option<String>, Query, description = "Competition type")
    ),
    responses(
        (status = 200, description = "Successfully retrieved competitions", body = Vec<CompetitionDto>),
        (status = 400, description = "Invalid filter", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_competitions(
    State(state): State<AppState>,
    Query(query): Query<CompetitionListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = CompetitionFilter::new(
        query.university_id,
        query.status.as_deref(),
        query.competition_type.as_deref(),
    )?;

    let competitions = CompetitionService::new(&state.db)
        .get_filtered(filter)
        .await?;

    Ok(Json(
        ApiResponse::list(
            competitions
                .into_iter()
                .map(CompetitionWithUniversity::into_dto)
                .collect(),
        )
        .with_filters(json!({
            "university_id": query.university_id,
            "status": query.status,
            "competition_type": query.competition_type,
        })),
    ))
}

#[utoipa::path(
    get,
    path = "/api/competitions/{id}",
    tag = COMPETITION_TAG,
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved competition", body = CompetitionDto),
        (status = 404, description = "Competition not found", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_competition(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let competition = CompetitionService::new(&state.db).get_by_id(id).await?;

    Ok(Json(ApiResponse::data(competition.into_dto())))
}

/// Open a competition at a university.
///
/// # Returns
/// - `201 Created` - The created competition
/// - `400 Bad Request` - Missing fields, closing before opening, unknown type or university
#[utoipa::path(
    post,
    path = "/api/competitions",
    tag = COMPETITION_TAG,
    request_body = CreateCompetitionDto,
    responses(
        (status = 201, description = "Successfully created competition", body = CompetitionDto),
        (status = 400, description = "Invalid competition data", body = ApiErrorDto)
    ),
)]
pub async fn create_competition(
    State(state): State<AppState>,
    Json(payload): Json<CreateCompetitionDto>,
) -> Result<impl IntoResponse, WriteError> {
    let params = CreateCompetitionParams::from_dto(payload)?;

    let competition = CompetitionService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::data(competition.into_dto())
                .with_message("Competition created successfully"),
        ),
    ))
}

#[utoipa::path(
    put,
    path = "/api/competitions/{id}",
    tag = COMPETITION_TAG,
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    request_body = UpdateCompetitionDto,
    responses(
        (status = 200, description = "Successfully updated competition", body = CompetitionDto),
        (status = 400, description = "Invalid competition data or competition not found", body = ApiErrorDto)
    ),
)]
pub async fn update_competition(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCompetitionDto>,
) -> Result<impl IntoResponse, WriteError> {
    let params = UpdateCompetitionParams::from_dto(payload)?;

    let competition = CompetitionService::new(&state.db).update(id, params).await?;

    Ok(Json(
        ApiResponse::data(competition.into_dto()).with_message("Competition updated successfully"),
    ))
}

/// Delete a competition that has received no applications.
#[utoipa::path(
    delete,
    path = "/api/competitions/{id}",
    tag = COMPETITION_TAG,
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted competition"),
        (status = 400, description = "Competition not found or has applications", body = ApiErrorDto)
    ),
)]
pub async fn delete_competition(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, WriteError> {
    CompetitionService::new(&state.db).delete(id).await?;

    Ok(Json(ApiResponse::message("Competition deleted successfully")))
}

#[utoipa::path(
    patch,
    path = "/api/competitions/{id}/status",
    tag = COMPETITION_TAG,
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    request_body = StatusUpdateDto,
    responses(
        (status = 200, description = "Successfully updated status", body = CompetitionDto),
        (status = 400, description = "Invalid status or competition not found", body = ApiErrorDto)
    ),
)]
pub async fn update_competition_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<StatusUpdateDto>,
) -> Result<impl IntoResponse, WriteError> {
    let status = parse_required_enum::<CompetitionStatus>("Status", payload.status.as_deref())?;

    let competition = CompetitionService::new(&state.db)
        .update_status(id, status)
        .await?;

    Ok(Json(ApiResponse::data(competition.into_dto())))
}
