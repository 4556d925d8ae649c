use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::tenant::SchoolId;
use shared_types::{
    is_valid_session_note_type, AppError, CreateSessionNoteRequest, SessionNoteResponse,
    SESSION_NOTE_TYPES,
};

// ── Session note handlers ────────────────────────────────────────

/// GET /api/cases/{case_id}/session-notes
#[utoipa::path(
    get,
    path = "/api/cases/{case_id}/session-notes",
    params(
        ("case_id" = String, Path, description = "Case UUID"),
        ("X-School-Id" = String, Header, description = "School ID")
    ),
    responses(
        (status = 200, description = "Notes for case", body = Vec<SessionNoteResponse>)
    ),
    tag = "session-notes"
)]
#[tracing::instrument(skip(pool))]
pub async fn list_session_notes_by_case(
    State(pool): State<Pool<Postgres>>,
    school: SchoolId,
    Path(case_id): Path<String>,
) -> Result<Json<Vec<SessionNoteResponse>>, AppError> {
    let uuid =
        Uuid::parse_str(&case_id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    let notes = crate::repo::session_note::list_by_case(&pool, &school.0, uuid).await?;
    let responses: Vec<SessionNoteResponse> =
        notes.into_iter().map(SessionNoteResponse::from).collect();

    Ok(Json(responses))
}

/// POST /api/session-notes
#[utoipa::path(
    post,
    path = "/api/session-notes",
    request_body = CreateSessionNoteRequest,
    params(
        ("X-School-Id" = String, Header, description = "School ID")
    ),
    responses(
        (status = 201, description = "Session note recorded", body = SessionNoteResponse),
        (status = 400, description = "Invalid request", body = AppError)
    ),
    tag = "session-notes"
)]
#[tracing::instrument(skip(pool, body))]
pub async fn create_session_note(
    State(pool): State<Pool<Postgres>>,
    school: SchoolId,
    Json(body): Json<CreateSessionNoteRequest>,
) -> Result<(StatusCode, Json<SessionNoteResponse>), AppError> {
    if !is_valid_session_note_type(&body.note_type) {
        return Err(AppError::bad_request(format!(
            "Invalid note_type: {}. Valid values: {}",
            body.note_type,
            SESSION_NOTE_TYPES.join(", ")
        )));
    }

    if let Some(minutes) = body.duration_minutes {
        if minutes <= 0 {
            return Err(AppError::bad_request("duration_minutes must be positive"));
        }
    }

    let note = crate::repo::session_note::create(&pool, &school.0, body).await?;
    Ok((StatusCode::CREATED, Json(SessionNoteResponse::from(note))))
}
