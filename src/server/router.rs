//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its OpenAPI specification, and
//! Swagger UI serves the collected document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// Handlers sharing a path are registered in a single `routes!` call, one call per path.
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
///
/// # Returns
/// A `Router<AppState>` ready to receive the application state and middleware layers.
pub fn router() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "University Admin", description = "University administration API"), tags(
        (name = controller::university::UNIVERSITY_TAG, description = "Universities and their statistics"),
        (name = controller::person::PERSON_TAG, description = "Persons and the roles they hold"),
        (name = controller::user::USER_TAG, description = "Staff users"),
        (name = controller::student::STUDENT_TAG, description = "Students and their academic records"),
        (name = controller::applicant::APPLICANT_TAG, description = "Applicants and application codes"),
        (name = controller::competition::COMPETITION_TAG, description = "Admission competitions"),
        (name = controller::application::APPLICATION_TAG, description = "Applications to competitions"),
        (name = controller::annual_result::ANNUAL_RESULT_TAG, description = "Annual results, rankings and statistics"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Universities
        .routes(routes!(
            controller::university::get_universities,
            controller::university::create_university
        ))
        .routes(routes!(
            controller::university::get_university,
            controller::university::update_university,
            controller::university::delete_university
        ))
        .routes(routes!(controller::university::get_university_stats))
        .routes(routes!(controller::university::update_university_status))
        // Persons
        .routes(routes!(controller::person::create_person))
        .routes(routes!(
            controller::person::get_person,
            controller::person::update_person
        ))
        .routes(routes!(controller::person::get_person_by_national_id))
        .routes(routes!(controller::person::get_person_by_email))
        .routes(routes!(controller::person::search_persons))
        .routes(routes!(controller::person::get_persons_with_multiple_roles))
        // Users
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(controller::user::get_user_by_email))
        .routes(routes!(controller::user::get_user_by_employee_id))
        .routes(routes!(controller::user::get_users_by_role))
        .routes(routes!(controller::user::get_teachers_with_courses))
        .routes(routes!(controller::user::update_user_status))
        .routes(routes!(controller::user::get_user_stats))
        .routes(routes!(controller::user::search_users))
        .routes(routes!(controller::user::reassign_user_courses))
        // Students
        .routes(routes!(
            controller::student::get_students,
            controller::student::create_student
        ))
        .routes(routes!(
            controller::student::get_student,
            controller::student::update_student,
            controller::student::delete_student
        ))
        .routes(routes!(controller::student::get_student_by_number))
        .routes(routes!(controller::student::get_students_by_university))
        .routes(routes!(controller::student::update_student_status))
        .routes(routes!(controller::student::get_student_stats))
        .routes(routes!(controller::student::search_students))
        .routes(routes!(controller::student::get_academic_history))
        .routes(routes!(controller::student::transfer_student))
        .routes(routes!(controller::student::get_current_registration))
        .routes(routes!(controller::student::graduate_student))
        .routes(routes!(controller::student::get_students_by_status))
        // Applicants
        .routes(routes!(
            controller::applicant::get_applicants,
            controller::applicant::create_applicant
        ))
        .routes(routes!(
            controller::applicant::get_applicant,
            controller::applicant::update_applicant,
            controller::applicant::delete_applicant
        ))
        .routes(routes!(controller::applicant::get_applicant_by_code))
        .routes(routes!(controller::applicant::get_applicant_by_person))
        .routes(routes!(controller::applicant::search_applicants))
        .routes(routes!(
            controller::applicant::get_applicants_with_active_applications
        ))
        .routes(routes!(controller::applicant::get_applicants_by_date))
        .routes(routes!(controller::applicant::get_applicant_stats))
        .routes(routes!(controller::applicant::get_application_history))
        .routes(routes!(controller::applicant::merge_applicants))
        .routes(routes!(controller::applicant::regenerate_application_code))
        // Competitions
        .routes(routes!(
            controller::competition::get_competitions,
            controller::competition::create_competition
        ))
        .routes(routes!(
            controller::competition::get_competition,
            controller::competition::update_competition,
            controller::competition::delete_competition
        ))
        .routes(routes!(controller::competition::update_competition_status))
        // Applications
        .routes(routes!(
            controller::application::get_applications,
            controller::application::create_application
        ))
        .routes(routes!(
            controller::application::get_application,
            controller::application::delete_application
        ))
        .routes(routes!(controller::application::update_application_status))
        // Annual results
        .routes(routes!(
            controller::annual_result::get_annual_results,
            controller::annual_result::create_annual_result
        ))
        .routes(routes!(
            controller::annual_result::get_annual_result,
            controller::annual_result::update_annual_result,
            controller::annual_result::delete_annual_result
        ))
        .routes(routes!(
            controller::annual_result::get_annual_results_by_registration
        ))
        .routes(routes!(controller::annual_result::get_annual_results_by_student))
        .routes(routes!(controller::annual_result::get_student_annual_summary))
        .routes(routes!(controller::annual_result::get_annual_results_by_year))
        .routes(routes!(controller::annual_result::get_class_ranking))
        .routes(routes!(controller::annual_result::update_class_ranking))
        .routes(routes!(controller::annual_result::get_annual_stats))
        .routes(routes!(controller::annual_result::calculate_annual_result))
        .routes(routes!(controller::annual_result::generate_annual_result))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
