use shared_types::{AppError, CreateResourceRequest, Resource, ResourceCategory};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

const RESOURCE_COLUMNS: &str = "id, school_id, title, description, resource_type, category, \
     tags, thumbnail_url, video_url, audio_url, article_url, is_free, price, \
     author_name, duration_seconds, status, published_at, created_at";

/// List resources visible to a school, filtered by publication status.
///
/// With `include_global`, school-less (global) resources are included.
/// Newest published material comes first; unpublished rows sort by
/// creation date so drafts keep a stable position for staff tooling.
pub async fn list_visible(
    pool: &Pool<Postgres>,
    school_id: &str,
    status: &str,
    include_global: bool,
) -> Result<Vec<Resource>, AppError> {
    let scope = if include_global {
        "(school_id = $1 OR school_id IS NULL)"
    } else {
        "school_id = $1"
    };

    let rows = sqlx::query_as::<_, Resource>(&format!(
        "SELECT {RESOURCE_COLUMNS} FROM resources \
         WHERE {scope} AND status = $2 \
         ORDER BY published_at DESC NULLS LAST, created_at DESC"
    ))
    .bind(school_id)
    .bind(status)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// Insert a new resource owned by a school.
pub async fn create(
    pool: &Pool<Postgres>,
    school_id: &str,
    req: CreateResourceRequest,
) -> Result<Resource, AppError> {
    let status = req.status.as_deref().unwrap_or("draft");
    let published_at = if status == "published" {
        Some(chrono::Utc::now())
    } else {
        None
    };

    let row = sqlx::query_as::<_, Resource>(&format!(
        "INSERT INTO resources \
             (school_id, title, description, resource_type, category, tags, \
              thumbnail_url, video_url, audio_url, article_url, is_free, price, \
              author_name, duration_seconds, status, published_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16) \
         RETURNING {RESOURCE_COLUMNS}"
    ))
    .bind(school_id)
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.resource_type)
    .bind(&req.category)
    .bind(&req.tags)
    .bind(&req.thumbnail_url)
    .bind(&req.video_url)
    .bind(&req.audio_url)
    .bind(&req.article_url)
    .bind(req.is_free)
    .bind(req.price)
    .bind(&req.author_name)
    .bind(req.duration_seconds)
    .bind(status)
    .bind(published_at)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// List category labels visible to a school, alphabetically.
pub async fn list_categories(
    pool: &Pool<Postgres>,
    school_id: &str,
    include_global: bool,
) -> Result<Vec<ResourceCategory>, AppError> {
    let scope = if include_global {
        "(school_id = $1 OR school_id IS NULL)"
    } else {
        "school_id = $1"
    };

    let rows = sqlx::query_as::<_, ResourceCategory>(&format!(
        "SELECT id, school_id, category, created_at FROM resource_categories \
         WHERE {scope} ORDER BY category"
    ))
    .bind(school_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}
