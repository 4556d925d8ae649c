use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// School/tenant record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct School {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Request to register a school tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct InitSchoolRequest {
    pub id: String,
    pub name: String,
}
