use dioxus::prelude::*;
use shared_types::{CaseResponse, CaseSearchResponse};

/// Search cases with filters.
#[server]
pub async fn search_cases(
    school_id: String,
    status: Option<String>,
    risk_level: Option<String>,
    q: Option<String>,
    offset: Option<i64>,
    limit: Option<i64>,
) -> Result<CaseSearchResponse, ServerFnError> {
    use crate::db::get_db;
    use crate::repo::case;

    let pool = get_db().await;
    let offset = offset.unwrap_or(0).max(0);
    let limit = limit.unwrap_or(20).clamp(1, 100);

    let (cases, total) = case::search(
        pool,
        &school_id,
        status.as_deref().filter(|s| !s.is_empty()),
        risk_level.as_deref().filter(|s| !s.is_empty()),
        q.as_deref().filter(|s| !s.is_empty()),
        offset,
        limit,
    )
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let now = chrono::Utc::now();
    let mut responses = Vec::with_capacity(cases.len());
    for c in cases {
        let parents = case::list_parents(pool, c.id)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        responses.push(CaseResponse::from_row(c, parents, now));
    }

    Ok(CaseSearchResponse {
        cases: responses,
        total,
    })
}

/// Get a single case by ID, contacts embedded.
#[server]
pub async fn get_case(school_id: String, id: String) -> Result<CaseResponse, ServerFnError> {
    use crate::db::get_db;
    use crate::repo::case;
    use uuid::Uuid;

    let pool = get_db().await;
    let uuid = Uuid::parse_str(&id).map_err(|_| ServerFnError::new("Invalid UUID"))?;

    let c = case::find_by_id(pool, &school_id, uuid)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
        .ok_or_else(|| ServerFnError::new("Case not found"))?;

    let parents = case::list_parents(pool, c.id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(CaseResponse::from_row(c, parents, chrono::Utc::now()))
}
