use dioxus::prelude::*;
use shared_types::SessionNoteResponse;

/// List the session notes of a case, most recent first.
#[server]
pub async fn list_session_notes(
    school_id: String,
    case_id: String,
) -> Result<Vec<SessionNoteResponse>, ServerFnError> {
    use crate::db::get_db;
    use crate::repo::session_note;
    use uuid::Uuid;

    let pool = get_db().await;
    let uuid = Uuid::parse_str(&case_id).map_err(|_| ServerFnError::new("Invalid UUID"))?;

    let notes = session_note::list_by_case(pool, &school_id, uuid)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(notes.into_iter().map(SessionNoteResponse::from).collect())
}
