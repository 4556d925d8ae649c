use dioxus::prelude::*;
use shared_types::GoalResponse;

/// List the goals of a case in the order they were set.
#[server]
pub async fn list_goals(
    school_id: String,
    case_id: String,
) -> Result<Vec<GoalResponse>, ServerFnError> {
    use crate::db::get_db;
    use crate::repo::goal;
    use uuid::Uuid;

    let pool = get_db().await;
    let uuid = Uuid::parse_str(&case_id).map_err(|_| ServerFnError::new("Invalid UUID"))?;

    let goals = goal::list_by_case(pool, &school_id, uuid)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(goals.into_iter().map(GoalResponse::from).collect())
}
