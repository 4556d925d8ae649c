use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Validation constants ────────────────────────────────────────────

/// Valid session note type values matching the DB CHECK constraint.
pub const SESSION_NOTE_TYPES: &[&str] = &[
    "individual", "group", "parent_meeting", "crisis", "follow_up", "other",
];

/// Check whether a note type string is valid.
pub fn is_valid_session_note_type(s: &str) -> bool {
    SESSION_NOTE_TYPES.contains(&s)
}

// ── DB row struct ───────────────────────────────────────────────────

/// A record of one counselling session on a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct SessionNote {
    pub id: Uuid,
    pub school_id: String,
    pub case_id: Uuid,
    pub note_type: String,
    pub session_date: DateTime<Utc>,
    pub duration_minutes: Option<i32>,
    pub summary: Option<String>,
    pub interventions: Option<String>,
    pub next_steps: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ── API response type ───────────────────────────────────────────────

/// API response shape for a session note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SessionNoteResponse {
    pub id: String,
    pub case_id: String,
    pub note_type: String,
    pub session_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interventions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<String>,
}

impl From<SessionNote> for SessionNoteResponse {
    fn from(n: SessionNote) -> Self {
        Self {
            id: n.id.to_string(),
            case_id: n.case_id.to_string(),
            note_type: n.note_type,
            session_date: n.session_date.to_rfc3339(),
            duration_minutes: n.duration_minutes,
            summary: n.summary,
            interventions: n.interventions,
            next_steps: n.next_steps,
        }
    }
}

// ── Request type ────────────────────────────────────────────────────

/// Request to record a new session note on a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateSessionNoteRequest {
    pub case_id: Uuid,
    #[serde(default = "default_note_type")]
    pub note_type: String,
    pub session_date: DateTime<Utc>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub interventions: Option<String>,
    #[serde(default)]
    pub next_steps: Option<String>,
}

fn default_note_type() -> String {
    "individual".to_string()
}
