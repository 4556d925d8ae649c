use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Validation constants ────────────────────────────────────────────

/// Valid resource type values matching the DB CHECK constraint.
pub const RESOURCE_TYPES: &[&str] = &["VIDEO", "AUDIO", "ARTICLE", "RESEARCH_PAPER", "SPECIAL"];

/// Valid resource publication status values matching the DB CHECK constraint.
pub const RESOURCE_STATUSES: &[&str] = &["draft", "published", "archived"];

/// Check whether a resource type string is valid (canonical uppercase form).
pub fn is_valid_resource_type(s: &str) -> bool {
    RESOURCE_TYPES.contains(&s)
}

/// Check whether a resource status string is valid.
pub fn is_valid_resource_status(s: &str) -> bool {
    RESOURCE_STATUSES.contains(&s)
}

/// Human-readable label for a resource type. Tolerates case variants from
/// older records; unrecognized values fall back to "Resource".
pub fn resource_type_label(resource_type: &str) -> &'static str {
    match resource_type.to_uppercase().as_str() {
        "VIDEO" => "Video",
        "AUDIO" => "Audio",
        "ARTICLE" => "Article",
        "RESEARCH_PAPER" => "Research Paper",
        "SPECIAL" => "Special Resource",
        _ => "Resource",
    }
}

// ── DB row structs ──────────────────────────────────────────────────

/// A piece of published support content in the resource library.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Resource {
    pub id: Uuid,
    /// `None` marks a global resource visible to every school.
    pub school_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub resource_type: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub audio_url: Option<String>,
    pub article_url: Option<String>,
    pub is_free: bool,
    pub price: Option<f64>,
    pub author_name: Option<String>,
    pub duration_seconds: Option<i32>,
    pub status: String,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A category label grouping resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct ResourceCategory {
    pub id: Uuid,
    pub school_id: Option<String>,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

// ── API response types ──────────────────────────────────────────────

/// API response shape for a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ResourceResponse {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_url: Option<String>,
    pub is_free: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

impl From<Resource> for ResourceResponse {
    fn from(r: Resource) -> Self {
        Self {
            id: r.id.to_string(),
            title: r.title,
            description: r.description,
            resource_type: r.resource_type,
            category: r.category,
            tags: r.tags,
            thumbnail_url: r.thumbnail_url,
            video_url: r.video_url,
            audio_url: r.audio_url,
            article_url: r.article_url,
            is_free: r.is_free,
            price: r.price,
            author_name: r.author_name,
            duration_seconds: r.duration_seconds,
            published_at: r.published_at.map(|d| d.to_rfc3339()),
        }
    }
}

impl ResourceResponse {
    /// The first non-empty content URL, in video → audio → article priority
    /// order. Used by the "open in new tab" action.
    pub fn content_url(&self) -> Option<&str> {
        [&self.video_url, &self.audio_url, &self.article_url]
            .into_iter()
            .filter_map(|u| u.as_deref())
            .find(|u| !u.is_empty())
    }
}

/// API response shape for a category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ResourceCategoryResponse {
    pub id: String,
    pub category: String,
}

impl From<ResourceCategory> for ResourceCategoryResponse {
    fn from(c: ResourceCategory) -> Self {
        Self {
            id: c.id.to_string(),
            category: c.category,
        }
    }
}

// ── Filtering ───────────────────────────────────────────────────────

/// Filter criteria applied to an in-memory resource collection.
///
/// All three criteria are conjunctive; each is a pass-through when unset.
/// The query matches title or description as a case-insensitive substring;
/// type and category are exact matches against the stored values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceFilter {
    pub query: String,
    pub resource_type: Option<String>,
    pub category: Option<String>,
}

impl ResourceFilter {
    /// Whether a single resource satisfies every active criterion.
    ///
    /// A missing title or description matches as the empty string, so a
    /// non-empty query simply fails against it rather than erroring.
    pub fn matches(&self, resource: &ResourceResponse) -> bool {
        let matches_query = self.query.is_empty() || {
            let q = self.query.to_lowercase();
            resource.title.to_lowercase().contains(&q)
                || resource
                    .description
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&q)
        };

        let matches_type = self
            .resource_type
            .as_deref()
            .map_or(true, |t| resource.resource_type == t);

        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |c| resource.category.as_deref() == Some(c));

        matches_query && matches_type && matches_category
    }

    /// The ordered subsequence of `resources` satisfying all criteria.
    /// Input order is preserved; the input itself is never reordered.
    pub fn apply(&self, resources: &[ResourceResponse]) -> Vec<ResourceResponse> {
        resources
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}

// ── Request types ───────────────────────────────────────────────────

/// Request to add a resource to the library.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateResourceRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Title must not be empty"))
    )]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub resource_type: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub article_url: Option<String>,
    #[serde(default = "default_is_free")]
    pub is_free: bool,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Price must not be negative"))
    )]
    pub price: Option<f64>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
}

fn default_is_free() -> bool {
    true
}

/// Query parameters for the resource list.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct ResourceListParams {
    /// Publication status filter; defaults to "published".
    pub status: Option<String>,
    /// Whether global (school-less) resources are included.
    pub include_global: Option<bool>,
}
