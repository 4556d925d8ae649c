use shared_types::{AppError, InitSchoolRequest, School};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// Find a school by its slug.
pub async fn find_by_id(pool: &Pool<Postgres>, id: &str) -> Result<Option<School>, AppError> {
    let row = sqlx::query_as::<_, School>("SELECT id, name, created_at FROM schools WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Register a school, updating the display name if the slug already exists.
pub async fn upsert(pool: &Pool<Postgres>, req: InitSchoolRequest) -> Result<School, AppError> {
    let row = sqlx::query_as::<_, School>(
        "INSERT INTO schools (id, name) VALUES ($1, $2) \
         ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name \
         RETURNING id, name, created_at",
    )
    .bind(&req.id)
    .bind(&req.name)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}
