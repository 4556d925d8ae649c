use axum::{routing::get, Json, Router};
use shared_types::{
    AppError, AppErrorKind, CaseResponse, CaseSearchResponse, CreateCaseRequest,
    CreateGoalRequest, CreateResourceRequest, CreateSessionNoteRequest, GoalResponse,
    InitSchoolRequest, ParentContactEntry, ParentContactResponse, ResourceCategoryResponse,
    ResourceResponse, School, SessionNoteResponse,
};
use utoipa::OpenApi;

use crate::db::AppState;
use crate::health::HealthResponse;

/// OpenAPI document covering the REST surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "WellNest API",
        description = "Counselling case management and resource library",
    ),
    paths(
        crate::rest::case::search_cases,
        crate::rest::case::get_case,
        crate::rest::case::create_case,
        crate::rest::case::add_parent_contact,
        crate::rest::session_note::list_session_notes_by_case,
        crate::rest::session_note::create_session_note,
        crate::rest::goal::list_goals_by_case,
        crate::rest::goal::create_goal,
        crate::rest::resource::list_resources,
        crate::rest::resource::create_resource,
        crate::rest::resource::list_resource_categories,
        crate::rest::school::init_school,
        crate::rest::school::get_current_school,
        crate::health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        CaseResponse,
        CaseSearchResponse,
        CreateCaseRequest,
        CreateGoalRequest,
        CreateResourceRequest,
        CreateSessionNoteRequest,
        GoalResponse,
        HealthResponse,
        InitSchoolRequest,
        ParentContactEntry,
        ParentContactResponse,
        ResourceCategoryResponse,
        ResourceResponse,
        School,
        SessionNoteResponse,
    )),
    tags(
        (name = "cases", description = "Counselling case records"),
        (name = "session-notes", description = "Session notes on a case"),
        (name = "goals", description = "Goals set on a case"),
        (name = "resources", description = "Resource library"),
        (name = "schools", description = "School tenants"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the REST router with the OpenAPI document attached.
pub fn api_router(pool: sqlx::Pool<sqlx::Postgres>) -> Router {
    let state = AppState { pool };

    crate::rest::api_router()
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
}
