use shared_types::{AppError, CreateSessionNoteRequest, SessionNote};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const NOTE_COLUMNS: &str = "id, school_id, case_id, note_type, session_date, \
     duration_minutes, summary, interventions, next_steps, created_at";

/// List the session notes of a case, most recent session first.
pub async fn list_by_case(
    pool: &Pool<Postgres>,
    school_id: &str,
    case_id: Uuid,
) -> Result<Vec<SessionNote>, AppError> {
    let rows = sqlx::query_as::<_, SessionNote>(&format!(
        "SELECT {NOTE_COLUMNS} FROM session_notes \
         WHERE case_id = $1 AND school_id = $2 \
         ORDER BY session_date DESC"
    ))
    .bind(case_id)
    .bind(school_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// Insert a new session note.
pub async fn create(
    pool: &Pool<Postgres>,
    school_id: &str,
    req: CreateSessionNoteRequest,
) -> Result<SessionNote, AppError> {
    let row = sqlx::query_as::<_, SessionNote>(&format!(
        "INSERT INTO session_notes \
             (school_id, case_id, note_type, session_date, duration_minutes, \
              summary, interventions, next_steps) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
         RETURNING {NOTE_COLUMNS}"
    ))
    .bind(school_id)
    .bind(req.case_id)
    .bind(&req.note_type)
    .bind(req.session_date)
    .bind(req.duration_minutes)
    .bind(&req.summary)
    .bind(&req.interventions)
    .bind(&req.next_steps)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}
