use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use sqlx::{Pool, Postgres};
use validator::Validate;

use crate::tenant::SchoolId;
use shared_types::{
    is_valid_resource_status, is_valid_resource_type, AppError, CreateResourceRequest,
    ResourceCategoryResponse, ResourceListParams, ResourceResponse, RESOURCE_TYPES,
};

// ── Resource library handlers ────────────────────────────────────

/// GET /api/resources
#[utoipa::path(
    get,
    path = "/api/resources",
    params(
        ResourceListParams,
        ("X-School-Id" = String, Header, description = "School ID")
    ),
    responses(
        (status = 200, description = "Visible resources", body = Vec<ResourceResponse>)
    ),
    tag = "resources"
)]
#[tracing::instrument(skip(pool))]
pub async fn list_resources(
    State(pool): State<Pool<Postgres>>,
    school: SchoolId,
    Query(params): Query<ResourceListParams>,
) -> Result<Json<Vec<ResourceResponse>>, AppError> {
    let status = params.status.as_deref().unwrap_or("published");
    if !is_valid_resource_status(status) {
        return Err(AppError::bad_request(format!("Invalid status: {status}")));
    }
    let include_global = params.include_global.unwrap_or(true);

    let resources =
        crate::repo::resource::list_visible(&pool, &school.0, status, include_global).await?;
    let responses: Vec<ResourceResponse> =
        resources.into_iter().map(ResourceResponse::from).collect();

    Ok(Json(responses))
}

/// POST /api/resources
#[utoipa::path(
    post,
    path = "/api/resources",
    request_body = CreateResourceRequest,
    params(
        ("X-School-Id" = String, Header, description = "School ID")
    ),
    responses(
        (status = 201, description = "Resource added", body = ResourceResponse),
        (status = 400, description = "Invalid request", body = AppError)
    ),
    tag = "resources"
)]
#[tracing::instrument(skip(pool, body))]
pub async fn create_resource(
    State(pool): State<Pool<Postgres>>,
    school: SchoolId,
    Json(body): Json<CreateResourceRequest>,
) -> Result<(StatusCode, Json<ResourceResponse>), AppError> {
    body.validate()?;

    if !is_valid_resource_type(&body.resource_type) {
        return Err(AppError::bad_request(format!(
            "Invalid resource_type: {}. Valid values: {}",
            body.resource_type,
            RESOURCE_TYPES.join(", ")
        )));
    }

    if let Some(status) = body.status.as_deref() {
        if !is_valid_resource_status(status) {
            return Err(AppError::bad_request(format!("Invalid status: {status}")));
        }
    }

    let resource = crate::repo::resource::create(&pool, &school.0, body).await?;
    Ok((StatusCode::CREATED, Json(ResourceResponse::from(resource))))
}

/// GET /api/resource-categories
#[utoipa::path(
    get,
    path = "/api/resource-categories",
    params(
        ("include_global" = Option<bool>, Query, description = "Include global categories"),
        ("X-School-Id" = String, Header, description = "School ID")
    ),
    responses(
        (status = 200, description = "Visible categories", body = Vec<ResourceCategoryResponse>)
    ),
    tag = "resources"
)]
#[tracing::instrument(skip(pool))]
pub async fn list_resource_categories(
    State(pool): State<Pool<Postgres>>,
    school: SchoolId,
    Query(params): Query<ResourceListParams>,
) -> Result<Json<Vec<ResourceCategoryResponse>>, AppError> {
    let include_global = params.include_global.unwrap_or(true);

    let categories =
        crate::repo::resource::list_categories(&pool, &school.0, include_global).await?;
    let responses: Vec<ResourceCategoryResponse> = categories
        .into_iter()
        .map(ResourceCategoryResponse::from)
        .collect();

    Ok(Json(responses))
}
