pub mod case;
pub mod goal;
pub mod resource;
pub mod school;
pub mod session_note;

use crate::db::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Build the combined REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Cases
        .route("/api/cases", get(case::search_cases).post(case::create_case))
        .route("/api/cases/{id}", get(case::get_case))
        .route("/api/cases/{id}/parents", post(case::add_parent_contact))
        .route(
            "/api/cases/{case_id}/session-notes",
            get(session_note::list_session_notes_by_case),
        )
        .route(
            "/api/cases/{case_id}/goals",
            get(goal::list_goals_by_case),
        )
        // Session notes & goals
        .route("/api/session-notes", post(session_note::create_session_note))
        .route("/api/goals", post(goal::create_goal))
        // Resource library
        .route(
            "/api/resources",
            get(resource::list_resources).post(resource::create_resource),
        )
        .route(
            "/api/resource-categories",
            get(resource::list_resource_categories),
        )
        // School tenants
        .route("/api/schools", post(school::init_school))
        .route("/api/schools/current", get(school::get_current_school))
        // Health
        .route("/health", get(crate::health::health_check))
}
