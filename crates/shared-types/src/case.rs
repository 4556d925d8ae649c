use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Validation constants ────────────────────────────────────────────

/// Valid risk level values matching the DB CHECK constraint.
pub const RISK_LEVELS: &[&str] = &["low", "medium", "high", "critical"];

/// Valid case status values matching the DB CHECK constraint.
pub const CASE_STATUSES: &[&str] = &[
    "intake", "assessment", "intervention", "monitoring", "active", "closed",
];

/// Check whether a risk level string is valid.
pub fn is_valid_risk_level(s: &str) -> bool {
    RISK_LEVELS.contains(&s)
}

/// Check whether a status string is a valid case status.
pub fn is_valid_case_status(s: &str) -> bool {
    CASE_STATUSES.contains(&s)
}

// ── DB row structs ──────────────────────────────────────────────────

/// A counselling engagement record for a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct CounsellingCase {
    pub id: Uuid,
    pub school_id: String,
    pub student_name: String,
    pub assigned_counsellor: Option<String>,
    pub risk_level: String,
    pub status: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

/// A parent or guardian contact attached to a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct ParentContact {
    pub id: Uuid,
    pub case_id: Uuid,
    pub name: String,
    pub relationship: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_primary: bool,
    /// Three-valued: `None` means consent was never recorded.
    pub consent_given: Option<bool>,
    pub created_at: DateTime<Utc>,
}

// ── API response types ──────────────────────────────────────────────

/// API response shape for a parent/guardian contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ParentContactResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub is_primary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_given: Option<bool>,
}

impl From<ParentContact> for ParentContactResponse {
    fn from(p: ParentContact) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            relationship: p.relationship,
            phone: p.phone,
            email: p.email,
            is_primary: p.is_primary,
            consent_given: p.consent_given,
        }
    }
}

/// API response shape for a counselling case, with contacts embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseResponse {
    pub id: String,
    pub student_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_counsellor: Option<String>,
    pub risk_level: String,
    pub status: String,
    pub tags: Vec<String>,
    pub parents: Vec<ParentContactResponse>,
    pub created_at: String,
    /// Whole days since the case was opened, as of response time.
    pub days_open: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<String>,
}

impl CaseResponse {
    /// Assemble a response from a case row, its contacts, and the current time.
    ///
    /// `days_open` is derived here rather than stored so it never goes stale.
    pub fn from_row(c: CounsellingCase, parents: Vec<ParentContact>, now: DateTime<Utc>) -> Self {
        let days_open = (now - c.created_at).num_days().max(0);
        Self {
            id: c.id.to_string(),
            student_name: c.student_name,
            assigned_counsellor: c.assigned_counsellor,
            risk_level: c.risk_level,
            status: c.status,
            tags: c.tags,
            parents: parents.into_iter().map(ParentContactResponse::from).collect(),
            created_at: c.created_at.to_rfc3339(),
            days_open,
            closed_at: c.closed_at.map(|d| d.to_rfc3339()),
        }
    }

    /// Whether the case's risk level warrants the emergency-contact callout.
    ///
    /// Risk values arrive in mixed case from older records; compare loosely.
    pub fn is_high_risk(&self) -> bool {
        matches!(self.risk_level.to_lowercase().as_str(), "high" | "critical")
    }

    /// The single contact shown in the emergency-contact block: the
    /// primary-flagged parent, or the first in list order when no contact
    /// is flagged. Ties between non-primary contacts preserve list order.
    pub fn emergency_contact(&self) -> Option<&ParentContactResponse> {
        self.parents
            .iter()
            .find(|p| p.is_primary)
            .or_else(|| self.parents.first())
    }
}

/// Search response for cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseSearchResponse {
    pub cases: Vec<CaseResponse>,
    pub total: i64,
}

// ── Request types ───────────────────────────────────────────────────

/// Request to open a new counselling case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateCaseRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Student name must not be empty"))
    )]
    pub student_name: String,
    #[serde(default)]
    pub assigned_counsellor: Option<String>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A parent contact supplied when creating or updating a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ParentContactEntry {
    pub name: String,
    #[serde(default)]
    pub relationship: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub consent_given: Option<bool>,
}

/// Query parameters for case search.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct CaseSearchParams {
    pub status: Option<String>,
    pub risk_level: Option<String>,
    pub q: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}
