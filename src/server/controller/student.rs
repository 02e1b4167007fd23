use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::StudentStatus;
use sea_orm::ActiveEnum;
use serde::Deserialize;
use serde_json::json;

use crate::{
    model::{
        academic::RegistrationRecordDto,
        api::{ApiErrorDto, ApiResponse, StatusUpdateDto},
        student::{
            AcademicHistoryDto, CreateStudentDto, StudentDetailDto, StudentDto, StudentStatsDto,
            TransferStudentDto, UniversityStudentDto, UpdateStudentDto,
        },
    },
    server::{
        error::{AppError, WriteError},
        model::student::{
            CreateStudentParams, StudentFilter, StudentWithRelations, UniversityStudent,
            UpdateStudentParams,
        },
        service::student::StudentService,
        state::AppState,
        util::enums::{parse_enum, parse_required_enum},
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

#[derive(Deserialize, Default)]
pub struct StudentListQuery {
    pub university_id: Option<i32>,
    pub status: Option<String>,
    pub admission_type: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct UniversityScopeQuery {
    pub university_id: Option<i32>,
}

fn into_dtos(students: Vec<StudentWithRelations>) -> Vec<StudentDto> {
    students
        .into_iter()
        .map(StudentWithRelations::into_dto)
        .collect()
}

fn into_university_dtos(students: Vec<UniversityStudent>) -> Vec<UniversityStudentDto> {
    students
        .into_iter()
        .map(UniversityStudent::into_dto)
        .collect()
}

/// Get students matching the optional filters.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `university_id`, `status` and `admission_type` equality filters
///
/// # Returns
/// - `200 OK` - Students, latest admission first, with the applied filters echoed back
/// - `400 Bad Request` - Unknown status or admission type
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    params(
        ("university_id" = Option<i32>, Query, description = "University ID"),
        ("status" = Option<String>, Query, description = "Student status"),
        ("admission_type" = Option<String>, Query, description = "Admission type")
    ),
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 400, description = "Invalid filter", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    Query(query): Query<StudentListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = StudentFilter::new(
        query.university_id,
        query.status.as_deref(),
        query.admission_type.as_deref(),
    )?;

    let students = StudentService::new(&state.db).get_filtered(filter).await?;

    Ok(Json(ApiResponse::list(into_dtos(students)).with_filters(
        json!({
            "university_id": query.university_id,
            "status": query.status,
            "admission_type": query.admission_type,
        }),
    )))
}

/// Get a student with cards, registrations and recent grades.
///
/// # Returns
/// - `200 OK` - The student detail
/// - `404 Not Found` - Student does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDetailDto),
        (status = 404, description = "Student not found", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).get_by_id(id).await?;

    Ok(Json(ApiResponse::data(student.into_dto())))
}

/// Create a student together with its person.
///
/// Both rows are written in one transaction; on any failure neither is kept.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Person fields plus student fields
///
/// # Returns
/// - `201 Created` - The created student
/// - `400 Bad Request` - Missing fields, unknown university, duplicate student number,
///   academic email, national ID or personal email
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ApiErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, WriteError> {
    let params = CreateStudentParams::from_dto(payload)?;

    let student = StudentService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(student.into_dto()).with_message("Student created successfully")),
    ))
}

/// Update a student and its person.
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid student data or student not found", body = ApiErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, WriteError> {
    let params = UpdateStudentParams::from_dto(payload)?;

    let student = StudentService::new(&state.db).update(id, params).await?;

    Ok(Json(
        ApiResponse::data(student.into_dto()).with_message("Student updated successfully"),
    ))
}

/// Delete a student and its person.
///
/// # Returns
/// - `200 OK` - Student deleted
/// - `400 Bad Request` - Student not found or has registrations, grades or cards
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted student"),
        (status = 400, description = "Student not found or has dependents", body = ApiErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, WriteError> {
    StudentService::new(&state.db).delete(id).await?;

    Ok(Json(ApiResponse::message("Student deleted successfully")))
}

/// Get a student by student number.
#[utoipa::path(
    get,
    path = "/api/students/number/{number}",
    tag = STUDENT_TAG,
    params(
        ("number" = String, Path, description = "Student number")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 404, description = "Student not found", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_student_by_number(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).get_by_number(&number).await?;

    Ok(Json(ApiResponse::data(student.into_dto())))
}

/// Get the students of a university with their latest registration.
///
/// # Arguments
/// - `university_id` - University to list
/// - `query` - Optional `status` and `admission_type` equality filters
///
/// # Returns
/// - `200 OK` - Students ordered by last name, empty for an unknown university
/// - `400 Bad Request` - Unknown status or admission type
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students/university/{university_id}",
    tag = STUDENT_TAG,
    params(
        ("university_id" = i32, Path, description = "University ID"),
        ("status" = Option<String>, Query, description = "Student status"),
        ("admission_type" = Option<String>, Query, description = "Admission type")
    ),
    responses(
        (status = 200, description = "Students of the university", body = Vec<UniversityStudentDto>),
        (status = 400, description = "Invalid filter", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_students_by_university(
    State(state): State<AppState>,
    Path(university_id): Path<i32>,
    Query(query): Query<StudentListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = StudentFilter::new(
        Some(university_id),
        query.status.as_deref(),
        query.admission_type.as_deref(),
    )?;

    let students = StudentService::new(&state.db)
        .get_by_university(university_id, filter)
        .await?;

    Ok(Json(
        ApiResponse::list(into_university_dtos(students))
            .with_university_id(Some(university_id))
            .with_filters(json!({
                "status": query.status,
                "admission_type": query.admission_type,
            })),
    ))
}

/// Update the status of a student.
///
/// Accepts exactly `active`, `graduated`, `dropped_out`, `expelled`, `transferred`
/// and `suspended`; any status can follow any other.
#[utoipa::path(
    patch,
    path = "/api/students/{id}/status",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = StatusUpdateDto,
    responses(
        (status = 200, description = "Successfully updated status", body = StudentDto),
        (status = 400, description = "Invalid status or student not found", body = ApiErrorDto)
    ),
)]
pub async fn update_student_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<StatusUpdateDto>,
) -> Result<impl IntoResponse, WriteError> {
    let status = parse_required_enum::<StudentStatus>("Status", payload.status.as_deref())?;

    let student = StudentService::new(&state.db)
        .update_status(id, status)
        .await?;

    Ok(Json(
        ApiResponse::data(student.into_dto())
            .with_message(format!("Student status updated to {}", status.to_value())),
    ))
}

/// Get student counts per status, admission type and baccalaureate year.
#[utoipa::path(
    get,
    path = "/api/students/stats/overview",
    tag = STUDENT_TAG,
    params(
        ("university_id" = Option<i32>, Query, description = "Restrict to one university")
    ),
    responses(
        (status = 200, description = "Student statistics", body = StudentStatsDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_student_stats(
    State(state): State<AppState>,
    Query(query): Query<UniversityScopeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let stats = StudentService::new(&state.db)
        .get_stats(query.university_id)
        .await?;

    Ok(Json(
        ApiResponse::data(stats.into_dto()).with_university_id(query.university_id),
    ))
}

/// Search students.
///
/// Matches the student number, academic email, first and last name and national ID.
#[utoipa::path(
    get,
    path = "/api/students/search/{term}",
    tag = STUDENT_TAG,
    params(
        ("term" = String, Path, description = "Search term, at least 2 characters"),
        ("university_id" = Option<i32>, Query, description = "Restrict to one university")
    ),
    responses(
        (status = 200, description = "Matching students", body = Vec<StudentDto>),
        (status = 400, description = "Search term too short", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn search_students(
    State(state): State<AppState>,
    Path(term): Path<String>,
    Query(query): Query<UniversityScopeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db)
        .search(&term, query.university_id)
        .await?;

    Ok(Json(
        ApiResponse::list(into_dtos(students))
            .with_search_term(term)
            .with_university_id(query.university_id),
    ))
}

/// Get every registration of a student with grades and results.
#[utoipa::path(
    get,
    path = "/api/students/{id}/academic-history",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Academic history", body = AcademicHistoryDto),
        (status = 404, description = "Student not found", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_academic_history(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let history = StudentService::new(&state.db)
        .get_academic_history(id)
        .await?;

    Ok(Json(ApiResponse::data(history.into_dto())))
}

/// Transfer a student to another university.
///
/// Sets the university and the status `transferred` in one transaction.
///
/// # Returns
/// - `200 OK` - The transferred student
/// - `400 Bad Request` - Target university missing or unknown, or student not found
#[utoipa::path(
    post,
    path = "/api/students/{id}/transfer",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = TransferStudentDto,
    responses(
        (status = 200, description = "Successfully transferred student", body = StudentDto),
        (status = 400, description = "Invalid transfer", body = ApiErrorDto)
    ),
)]
pub async fn transfer_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<TransferStudentDto>,
) -> Result<impl IntoResponse, WriteError> {
    let target_university_id = payload
        .target_university_id
        .ok_or_else(|| AppError::Validation("Target university ID is required".to_string()))?;

    let student = StudentService::new(&state.db)
        .transfer(id, target_university_id)
        .await?;

    Ok(Json(
        ApiResponse::data(student.into_dto()).with_message("Student transferred successfully"),
    ))
}

/// Get the registration of a student for the current academic year.
///
/// # Returns
/// - `200 OK` - Registration with specialization, program and grades
/// - `404 Not Found` - Student not found or not registered this year
#[utoipa::path(
    get,
    path = "/api/students/{id}/current-registration",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Current registration", body = RegistrationRecordDto),
        (status = 404, description = "No current registration found for student", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_current_registration(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let registration = StudentService::new(&state.db)
        .get_current_registration(id)
        .await?;

    Ok(Json(ApiResponse::data(registration.into_dto())))
}

/// Mark a student as graduated.
///
/// Requires a registration for the current academic year. Credits are not checked.
#[utoipa::path(
    post,
    path = "/api/students/{id}/graduate",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully graduated student", body = StudentDto),
        (status = 400, description = "Student not found or not registered this year", body = ApiErrorDto)
    ),
)]
pub async fn graduate_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, WriteError> {
    let student = StudentService::new(&state.db).graduate(id).await?;

    Ok(Json(
        ApiResponse::data(student.into_dto()).with_message("Student graduated successfully"),
    ))
}

/// Get students with a status.
#[utoipa::path(
    get,
    path = "/api/students/status/{status}",
    tag = STUDENT_TAG,
    params(
        ("status" = String, Path, description = "Student status"),
        ("university_id" = Option<i32>, Query, description = "Restrict to one university")
    ),
    responses(
        (status = 200, description = "Students with the status ordered by last name", body = Vec<UniversityStudentDto>),
        (status = 400, description = "Unknown status", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_students_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
    Query(query): Query<UniversityScopeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let parsed = parse_enum::<StudentStatus>("Status", &status)?;

    let students = StudentService::new(&state.db)
        .get_by_status(parsed, query.university_id)
        .await?;

    Ok(Json(
        ApiResponse::list(into_university_dtos(students))
            .with_status(status)
            .with_university_id(query.university_id),
    ))
}
