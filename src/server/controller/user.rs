use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::{UserRole, UserStatus};
use sea_orm::ActiveEnum;
use serde::Deserialize;
use serde_json::json;

use crate::{
    model::{
        api::{ApiErrorDto, ApiResponse, StatusUpdateDto},
        user::{
            CreateUserDto, ReassignCoursesDto, ReassignCoursesResultDto, UpdateUserDto,
            UserDetailDto, UserDto, UserStatsDto,
        },
    },
    server::{
        error::{AppError, WriteError},
        model::user::{CreateUserParams, UpdateUserParams, UserDetail, UserFilter, UserWithRelations},
        service::user::UserService,
        state::AppState,
        util::enums::{parse_enum, parse_required_enum},
    },
};

/// Tag for grouping staff user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize, Default)]
pub struct UserListQuery {
    pub university_id: Option<i32>,
    pub role: Option<String>,
    pub status: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct UniversityScopeQuery {
    pub university_id: Option<i32>,
}

/// Get staff users matching the optional filters.
///
/// # Arguments
/// - `query` - Optional `university_id`, `role` and `status` equality filters
///
/// # Returns
/// - `200 OK` - Users ordered by last name, with the applied filters echoed back
/// - `400 Bad Request` - Unknown role or status
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("university_id" = Option<i32>, Query, description = "University ID"),
        ("role" = Option<String>, Query, description = "User role"),
        ("status" = Option<String>, Query, description = "User status")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 400, description = "Invalid filter", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = UserFilter::new(
        query.university_id,
        query.role.as_deref(),
        query.status.as_deref(),
    )?;

    let users = UserService::new(&state.db).get_filtered(filter).await?;

    Ok(Json(
        ApiResponse::list(
            users
                .into_iter()
                .map(UserWithRelations::into_dto)
                .collect(),
        )
        .with_filters(json!({
            "university_id": query.university_id,
            "role": query.role,
            "status": query.status,
        })),
    ))
}

/// Get a user with the courses they teach.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDetailDto),
        (status = 404, description = "User not found", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok(Json(ApiResponse::data(user.into_dto())))
}

/// Create a staff user together with its person.
///
/// Both rows are written in one transaction.
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Missing fields, unknown role, university not found, duplicate
///   employee ID or email
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDetailDto),
        (status = 400, description = "Invalid user data", body = ApiErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, WriteError> {
    let params = CreateUserParams::from_dto(payload)?;

    let user = UserService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(user.into_dto()).with_message("User created successfully")),
    ))
}

/// Update a staff user and its person.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDetailDto),
        (status = 400, description = "Invalid user data or user not found", body = ApiErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, WriteError> {
    let params = UpdateUserParams::from_dto(payload)?;

    let user = UserService::new(&state.db).update(id, params).await?;

    Ok(Json(
        ApiResponse::data(user.into_dto()).with_message("User updated successfully"),
    ))
}

/// Delete a staff user and its person.
///
/// # Returns
/// - `200 OK` - User deleted
/// - `400 Bad Request` - User not found or still assigned to courses
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted user"),
        (status = 400, description = "User not found or still assigned to courses", body = ApiErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, WriteError> {
    UserService::new(&state.db).delete(id).await?;

    Ok(Json(ApiResponse::message("User deleted successfully")))
}

/// Get a user by staff email.
#[utoipa::path(
    get,
    path = "/api/users/email/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "Staff email")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 404, description = "User not found", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_email(&email).await?;

    Ok(Json(ApiResponse::data(user.into_dto())))
}

/// Get a user by employee ID.
#[utoipa::path(
    get,
    path = "/api/users/employee/{employee_id}",
    tag = USER_TAG,
    params(
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 404, description = "User not found", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_user_by_employee_id(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .get_by_employee_id(&employee_id)
        .await?;

    Ok(Json(ApiResponse::data(user.into_dto())))
}

/// Get users holding a role.
#[utoipa::path(
    get,
    path = "/api/users/role/{role}",
    tag = USER_TAG,
    params(
        ("role" = String, Path, description = "User role")
    ),
    responses(
        (status = 200, description = "Users with the role", body = Vec<UserDto>),
        (status = 400, description = "Unknown role", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_users_by_role(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let role = parse_enum::<UserRole>("Role", &role)?;

    let users = UserService::new(&state.db).get_by_role(role).await?;

    Ok(Json(ApiResponse::list(
        users
            .into_iter()
            .map(UserWithRelations::into_dto)
            .collect(),
    )))
}

/// Get every teacher with the courses they teach.
#[utoipa::path(
    get,
    path = "/api/users/teachers/courses",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Teachers with their courses", body = Vec<UserDetailDto>),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_teachers_with_courses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let teachers = UserService::new(&state.db)
        .get_teachers_with_courses()
        .await?;

    Ok(Json(ApiResponse::list(
        teachers.into_iter().map(UserDetail::into_dto).collect(),
    )))
}

/// Update the status of a user.
#[utoipa::path(
    patch,
    path = "/api/users/{id}/status",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = StatusUpdateDto,
    responses(
        (status = 200, description = "Successfully updated status", body = UserDetailDto),
        (status = 400, description = "Invalid status or user not found", body = ApiErrorDto)
    ),
)]
pub async fn update_user_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<StatusUpdateDto>,
) -> Result<impl IntoResponse, WriteError> {
    let status = parse_required_enum::<UserStatus>("Status", payload.status.as_deref())?;

    let user = UserService::new(&state.db).update_status(id, status).await?;

    Ok(Json(
        ApiResponse::data(user.into_dto())
            .with_message(format!("User status updated to {}", status.to_value())),
    ))
}

/// Get user counts per role and status.
#[utoipa::path(
    get,
    path = "/api/users/stats/overview",
    tag = USER_TAG,
    params(
        ("university_id" = Option<i32>, Query, description = "Restrict to one university")
    ),
    responses(
        (status = 200, description = "User statistics", body = UserStatsDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_user_stats(
    State(state): State<AppState>,
    Query(query): Query<UniversityScopeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let stats = UserService::new(&state.db)
        .get_stats(query.university_id)
        .await?;

    Ok(Json(
        ApiResponse::data(stats.into_dto()).with_university_id(query.university_id),
    ))
}

/// Search users by name, employee ID or staff email.
#[utoipa::path(
    get,
    path = "/api/users/search/{term}",
    tag = USER_TAG,
    params(
        ("term" = String, Path, description = "Search term, at least 2 characters")
    ),
    responses(
        (status = 200, description = "Matching users", body = Vec<UserDto>),
        (status = 400, description = "Search term too short", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn search_users(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).search(&term).await?;

    Ok(Json(
        ApiResponse::list(
            users
                .into_iter()
                .map(UserWithRelations::into_dto)
                .collect(),
        )
        .with_search_term(term),
    ))
}

/// Move every course taught by a user to another user.
///
/// # Returns
/// - `200 OK` - Number of courses moved
/// - `400 Bad Request` - Target missing or equal to the source, or either user not found
#[utoipa::path(
    post,
    path = "/api/users/{id}/reassign-courses",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Source user ID")
    ),
    request_body = ReassignCoursesDto,
    responses(
        (status = 200, description = "Courses reassigned", body = ReassignCoursesResultDto),
        (status = 400, description = "Invalid reassignment", body = ApiErrorDto)
    ),
)]
pub async fn reassign_user_courses(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ReassignCoursesDto>,
) -> Result<impl IntoResponse, WriteError> {
    let target_user_id = payload
        .target_user_id
        .ok_or_else(|| AppError::Validation("Target user ID is required".to_string()))?;

    let reassigned_courses = UserService::new(&state.db)
        .reassign_courses(id, target_user_id)
        .await?;

    Ok(Json(
        ApiResponse::data(ReassignCoursesResultDto {
            source_user_id: id,
            target_user_id,
            reassigned_courses,
        })
        .with_message("Courses reassigned successfully"),
    ))
}
