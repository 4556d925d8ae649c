use shared_types::{AppError, CounsellingCase, CreateCaseRequest, ParentContact, ParentContactEntry};
use sqlx::{Pool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const CASE_COLUMNS: &str = "id, school_id, student_name, assigned_counsellor, risk_level, \
     status, tags, created_at, updated_at, closed_at";

/// Insert a new counselling case.
pub async fn create(
    pool: &Pool<Postgres>,
    school_id: &str,
    req: CreateCaseRequest,
) -> Result<CounsellingCase, AppError> {
    let risk_level = req.risk_level.as_deref().unwrap_or("low");

    let row = sqlx::query_as::<_, CounsellingCase>(&format!(
        "INSERT INTO counselling_cases \
             (school_id, student_name, assigned_counsellor, risk_level, tags) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING {CASE_COLUMNS}"
    ))
    .bind(school_id)
    .bind(&req.student_name)
    .bind(&req.assigned_counsellor)
    .bind(risk_level)
    .bind(&req.tags)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Find a case by ID within a specific school.
pub async fn find_by_id(
    pool: &Pool<Postgres>,
    school_id: &str,
    id: Uuid,
) -> Result<Option<CounsellingCase>, AppError> {
    let row = sqlx::query_as::<_, CounsellingCase>(&format!(
        "SELECT {CASE_COLUMNS} FROM counselling_cases WHERE id = $1 AND school_id = $2"
    ))
    .bind(id)
    .bind(school_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Search cases with optional status/risk/text filters.
///
/// Returns the matching page plus the unpaged total. Ordering is newest
/// first so fresh intakes surface at the top of the list.
pub async fn search(
    pool: &Pool<Postgres>,
    school_id: &str,
    status: Option<&str>,
    risk_level: Option<&str>,
    q: Option<&str>,
    offset: i64,
    limit: i64,
) -> Result<(Vec<CounsellingCase>, i64), AppError> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {CASE_COLUMNS} FROM counselling_cases WHERE school_id = "
    ));
    builder.push_bind(school_id);
    push_filters(&mut builder, status, risk_level, q);
    builder.push(" ORDER BY created_at DESC OFFSET ");
    builder.push_bind(offset);
    builder.push(" LIMIT ");
    builder.push_bind(limit);

    let cases = builder
        .build_query_as::<CounsellingCase>()
        .fetch_all(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    let mut count_builder =
        QueryBuilder::new("SELECT COUNT(*) FROM counselling_cases WHERE school_id = ");
    count_builder.push_bind(school_id);
    push_filters(&mut count_builder, status, risk_level, q);

    let total: i64 = count_builder
        .build_query_scalar()
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok((cases, total))
}

fn push_filters(
    builder: &mut QueryBuilder<'_, Postgres>,
    status: Option<&str>,
    risk_level: Option<&str>,
    q: Option<&str>,
) {
    if let Some(status) = status {
        builder.push(" AND status = ");
        builder.push_bind(status.to_string());
    }
    if let Some(risk) = risk_level {
        builder.push(" AND risk_level = ");
        builder.push_bind(risk.to_string());
    }
    if let Some(q) = q {
        builder.push(" AND student_name ILIKE ");
        builder.push_bind(format!("%{q}%"));
    }
}

/// List the parent/guardian contacts of a case, insertion order preserved.
pub async fn list_parents(
    pool: &Pool<Postgres>,
    case_id: Uuid,
) -> Result<Vec<ParentContact>, AppError> {
    let rows = sqlx::query_as::<_, ParentContact>(
        "SELECT id, case_id, name, relationship, phone, email, is_primary, \
                consent_given, created_at \
         FROM parent_contacts WHERE case_id = $1 ORDER BY created_at",
    )
    .bind(case_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// Attach a parent contact to a case.
pub async fn add_parent(
    pool: &Pool<Postgres>,
    case_id: Uuid,
    entry: ParentContactEntry,
) -> Result<ParentContact, AppError> {
    let row = sqlx::query_as::<_, ParentContact>(
        "INSERT INTO parent_contacts \
             (case_id, name, relationship, phone, email, is_primary, consent_given) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         RETURNING id, case_id, name, relationship, phone, email, is_primary, \
                   consent_given, created_at",
    )
    .bind(case_id)
    .bind(&entry.name)
    .bind(&entry.relationship)
    .bind(&entry.phone)
    .bind(&entry.email)
    .bind(entry.is_primary)
    .bind(entry.consent_given)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}
