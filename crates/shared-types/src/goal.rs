use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Validation constants ────────────────────────────────────────────

/// Valid goal status values matching the DB CHECK constraint.
pub const GOAL_STATUSES: &[&str] = &["not_started", "in_progress", "completed"];

/// Check whether a goal status string is valid.
pub fn is_valid_goal_status(s: &str) -> bool {
    GOAL_STATUSES.contains(&s)
}

// ── DB row struct ───────────────────────────────────────────────────

/// A counselling goal set on a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Goal {
    pub id: Uuid,
    pub school_id: String,
    pub case_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub target_date: Option<NaiveDate>,
    /// Percentage as entered. Not clamped to 0-100 anywhere; the UI renders
    /// the raw value.
    pub progress: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── API response type ───────────────────────────────────────────────

/// API response shape for a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GoalResponse {
    pub id: String,
    pub case_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<i32>,
}

impl From<Goal> for GoalResponse {
    fn from(g: Goal) -> Self {
        Self {
            id: g.id.to_string(),
            case_id: g.case_id.to_string(),
            title: g.title,
            description: g.description,
            status: g.status,
            target_date: g.target_date.map(|d| d.to_string()),
            progress: g.progress,
        }
    }
}

// ── Request type ────────────────────────────────────────────────────

/// Request to set a new goal on a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateGoalRequest {
    pub case_id: Uuid,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Title must not be empty"))
    )]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub progress: Option<i32>,
}
