use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;
use validator::Validate;

use crate::tenant::SchoolId;
use shared_types::{
    is_valid_goal_status, AppError, CreateGoalRequest, GoalResponse, GOAL_STATUSES,
};

// ── Goal handlers ────────────────────────────────────────────────

/// GET /api/cases/{case_id}/goals
#[utoipa::path(
    get,
    path = "/api/cases/{case_id}/goals",
    params(
        ("case_id" = String, Path, description = "Case UUID"),
        ("X-School-Id" = String, Header, description = "School ID")
    ),
    responses(
        (status = 200, description = "Goals for case", body = Vec<GoalResponse>)
    ),
    tag = "goals"
)]
#[tracing::instrument(skip(pool))]
pub async fn list_goals_by_case(
    State(pool): State<Pool<Postgres>>,
    school: SchoolId,
    Path(case_id): Path<String>,
) -> Result<Json<Vec<GoalResponse>>, AppError> {
    let uuid =
        Uuid::parse_str(&case_id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    let goals = crate::repo::goal::list_by_case(&pool, &school.0, uuid).await?;
    let responses: Vec<GoalResponse> = goals.into_iter().map(GoalResponse::from).collect();

    Ok(Json(responses))
}

/// POST /api/goals
#[utoipa::path(
    post,
    path = "/api/goals",
    request_body = CreateGoalRequest,
    params(
        ("X-School-Id" = String, Header, description = "School ID")
    ),
    responses(
        (status = 201, description = "Goal set", body = GoalResponse),
        (status = 400, description = "Invalid request", body = AppError)
    ),
    tag = "goals"
)]
#[tracing::instrument(skip(pool, body))]
pub async fn create_goal(
    State(pool): State<Pool<Postgres>>,
    school: SchoolId,
    Json(body): Json<CreateGoalRequest>,
) -> Result<(StatusCode, Json<GoalResponse>), AppError> {
    body.validate()?;

    if let Some(status) = body.status.as_deref() {
        if !is_valid_goal_status(status) {
            return Err(AppError::bad_request(format!(
                "Invalid status: {}. Valid values: {}",
                status,
                GOAL_STATUSES.join(", ")
            )));
        }
    }

    let goal = crate::repo::goal::create(&pool, &school.0, body).await?;
    Ok((StatusCode::CREATED, Json(GoalResponse::from(goal))))
}
