use dioxus::prelude::*;
use shared_types::{ResourceCategoryResponse, ResourceResponse};

/// List the resources visible to a school.
///
/// `status` defaults to "published" — the browser never sees drafts.
#[server]
pub async fn list_resources(
    school_id: String,
    status: Option<String>,
    include_global: Option<bool>,
) -> Result<Vec<ResourceResponse>, ServerFnError> {
    use crate::db::get_db;
    use crate::repo::resource;

    let pool = get_db().await;
    let status = status
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "published".to_string());
    let include_global = include_global.unwrap_or(true);

    let resources = resource::list_visible(pool, &school_id, &status, include_global)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(resources.into_iter().map(ResourceResponse::from).collect())
}

/// List the category labels visible to a school.
#[server]
pub async fn list_resource_categories(
    school_id: String,
    include_global: Option<bool>,
) -> Result<Vec<ResourceCategoryResponse>, ServerFnError> {
    use crate::db::get_db;
    use crate::repo::resource;

    let pool = get_db().await;
    let include_global = include_global.unwrap_or(true);

    let categories = resource::list_categories(pool, &school_id, include_global)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(categories
        .into_iter()
        .map(ResourceCategoryResponse::from)
        .collect())
}
