use axum::{extract::State, http::StatusCode, Json};
use sqlx::{Pool, Postgres};

use crate::tenant::SchoolId;
use shared_types::{AppError, InitSchoolRequest, School};

// ── School tenant handlers ───────────────────────────────────────

/// GET /api/schools/current
#[utoipa::path(
    get,
    path = "/api/schools/current",
    params(
        ("X-School-Id" = String, Header, description = "School ID")
    ),
    responses(
        (status = 200, description = "The resolved school", body = School),
        (status = 404, description = "Unknown school", body = AppError)
    ),
    tag = "schools"
)]
#[tracing::instrument(skip(pool))]
pub async fn get_current_school(
    State(pool): State<Pool<Postgres>>,
    school: SchoolId,
) -> Result<Json<School>, AppError> {
    let row = crate::repo::school::find_by_id(&pool, &school.0)
        .await?
        .ok_or_else(|| AppError::not_found(format!("School {} not found", school.0)))?;

    Ok(Json(row))
}

/// POST /api/schools
#[utoipa::path(
    post,
    path = "/api/schools",
    request_body = InitSchoolRequest,
    responses(
        (status = 201, description = "School registered", body = School),
        (status = 400, description = "Invalid request", body = AppError)
    ),
    tag = "schools"
)]
#[tracing::instrument(skip(pool, body))]
pub async fn init_school(
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<InitSchoolRequest>,
) -> Result<(StatusCode, Json<School>), AppError> {
    if body.id.trim().is_empty() || body.name.trim().is_empty() {
        return Err(AppError::bad_request("id and name must not be empty"));
    }

    let row = crate::repo::school::upsert(&pool, body).await?;
    Ok((StatusCode::CREATED, Json(row)))
}
