use shared_types::{AppError, CreateGoalRequest, Goal};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const GOAL_COLUMNS: &str = "id, school_id, case_id, title, description, status, \
     target_date, progress, created_at, updated_at";

/// List the goals of a case in the order they were set.
pub async fn list_by_case(
    pool: &Pool<Postgres>,
    school_id: &str,
    case_id: Uuid,
) -> Result<Vec<Goal>, AppError> {
    let rows = sqlx::query_as::<_, Goal>(&format!(
        "SELECT {GOAL_COLUMNS} FROM goals \
         WHERE case_id = $1 AND school_id = $2 \
         ORDER BY created_at"
    ))
    .bind(case_id)
    .bind(school_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// Insert a new goal.
pub async fn create(
    pool: &Pool<Postgres>,
    school_id: &str,
    req: CreateGoalRequest,
) -> Result<Goal, AppError> {
    let status = req.status.as_deref().unwrap_or("not_started");

    let row = sqlx::query_as::<_, Goal>(&format!(
        "INSERT INTO goals \
             (school_id, case_id, title, description, status, target_date, progress) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         RETURNING {GOAL_COLUMNS}"
    ))
    .bind(school_id)
    .bind(req.case_id)
    .bind(&req.title)
    .bind(&req.description)
    .bind(status)
    .bind(req.target_date)
    .bind(req.progress)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}
