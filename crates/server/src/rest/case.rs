use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;
use validator::Validate;

use crate::tenant::SchoolId;
use shared_types::{
    is_valid_risk_level, AppError, CaseResponse, CaseSearchParams, CaseSearchResponse,
    CreateCaseRequest, ParentContactEntry, ParentContactResponse, RISK_LEVELS,
};

// ── Case handlers ────────────────────────────────────────────────

/// GET /api/cases
#[utoipa::path(
    get,
    path = "/api/cases",
    params(
        CaseSearchParams,
        ("X-School-Id" = String, Header, description = "School ID")
    ),
    responses(
        (status = 200, description = "Matching cases", body = CaseSearchResponse)
    ),
    tag = "cases"
)]
#[tracing::instrument(skip(pool))]
pub async fn search_cases(
    State(pool): State<Pool<Postgres>>,
    school: SchoolId,
    Query(params): Query<CaseSearchParams>,
) -> Result<Json<CaseSearchResponse>, AppError> {
    let offset = params.offset.unwrap_or(0).max(0);
    let limit = params.limit.unwrap_or(20).clamp(1, 100);

    let (cases, total) = crate::repo::case::search(
        &pool,
        &school.0,
        params.status.as_deref().filter(|s| !s.is_empty()),
        params.risk_level.as_deref().filter(|s| !s.is_empty()),
        params.q.as_deref().filter(|s| !s.is_empty()),
        offset,
        limit,
    )
    .await?;

    let now = chrono::Utc::now();
    let mut responses = Vec::with_capacity(cases.len());
    for c in cases {
        let parents = crate::repo::case::list_parents(&pool, c.id).await?;
        responses.push(CaseResponse::from_row(c, parents, now));
    }

    Ok(Json(CaseSearchResponse {
        cases: responses,
        total,
    }))
}

/// GET /api/cases/{id}
#[utoipa::path(
    get,
    path = "/api/cases/{id}",
    params(
        ("id" = String, Path, description = "Case UUID"),
        ("X-School-Id" = String, Header, description = "School ID")
    ),
    responses(
        (status = 200, description = "Case found", body = CaseResponse),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "cases"
)]
#[tracing::instrument(skip(pool))]
pub async fn get_case(
    State(pool): State<Pool<Postgres>>,
    school: SchoolId,
    Path(id): Path<String>,
) -> Result<Json<CaseResponse>, AppError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    let c = crate::repo::case::find_by_id(&pool, &school.0, uuid)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Case {} not found", id)))?;

    let parents = crate::repo::case::list_parents(&pool, c.id).await?;

    Ok(Json(CaseResponse::from_row(c, parents, chrono::Utc::now())))
}

/// POST /api/cases
#[utoipa::path(
    post,
    path = "/api/cases",
    request_body = CreateCaseRequest,
    params(
        ("X-School-Id" = String, Header, description = "School ID")
    ),
    responses(
        (status = 201, description = "Case opened", body = CaseResponse),
        (status = 400, description = "Invalid request", body = AppError)
    ),
    tag = "cases"
)]
#[tracing::instrument(skip(pool, body))]
pub async fn create_case(
    State(pool): State<Pool<Postgres>>,
    school: SchoolId,
    Json(body): Json<CreateCaseRequest>,
) -> Result<(StatusCode, Json<CaseResponse>), AppError> {
    body.validate()?;

    if let Some(risk) = body.risk_level.as_deref() {
        if !is_valid_risk_level(risk) {
            return Err(AppError::bad_request(format!(
                "Invalid risk_level: {}. Valid values: {}",
                risk,
                RISK_LEVELS.join(", ")
            )));
        }
    }

    let c = crate::repo::case::create(&pool, &school.0, body).await?;
    let response = CaseResponse::from_row(c, Vec::new(), chrono::Utc::now());
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/cases/{id}/parents
#[utoipa::path(
    post,
    path = "/api/cases/{id}/parents",
    request_body = ParentContactEntry,
    params(
        ("id" = String, Path, description = "Case UUID"),
        ("X-School-Id" = String, Header, description = "School ID")
    ),
    responses(
        (status = 201, description = "Contact added", body = ParentContactResponse),
        (status = 404, description = "Case not found", body = AppError)
    ),
    tag = "cases"
)]
#[tracing::instrument(skip(pool, body))]
pub async fn add_parent_contact(
    State(pool): State<Pool<Postgres>>,
    school: SchoolId,
    Path(id): Path<String>,
    Json(body): Json<ParentContactEntry>,
) -> Result<(StatusCode, Json<ParentContactResponse>), AppError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    if body.name.trim().is_empty() {
        return Err(AppError::bad_request("name must not be empty"));
    }

    // Confirm the case exists in this school before attaching a contact.
    crate::repo::case::find_by_id(&pool, &school.0, uuid)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Case {} not found", id)))?;

    let parent = crate::repo::case::add_parent(&pool, uuid, body).await?;
    Ok((StatusCode::CREATED, Json(ParentContactResponse::from(parent))))
}
