use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::AppError;

/// Extractor that resolves the school/tenant ID from the request.
///
/// Priority:
/// 1. `X-School-Id` header
/// 2. Host subdomain (e.g., `northfield.wellnest.app` -> `northfield`)
/// 3. `?school=xxx` query param
#[derive(Debug, Clone)]
pub struct SchoolId(pub String);

impl SchoolId {
    /// Sanitize a tenant ID to lowercase alphanumeric + hyphens.
    fn sanitize(raw: &str) -> String {
        raw.trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '-')
            .collect()
    }
}

impl<S> FromRequestParts<S> for SchoolId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // 1. X-School-Id header
        if let Some(val) = parts.headers.get("x-school-id") {
            if let Ok(s) = val.to_str() {
                let sanitized = Self::sanitize(s);
                if !sanitized.is_empty() {
                    return Ok(SchoolId(sanitized));
                }
            }
        }

        // 2. Host subdomain
        if let Some(host) = parts.headers.get("host") {
            if let Ok(h) = host.to_str() {
                let host_parts: Vec<&str> = h.split('.').collect();
                if host_parts.len() >= 3 {
                    let sanitized = Self::sanitize(host_parts[0]);
                    if !sanitized.is_empty() && sanitized != "www" {
                        return Ok(SchoolId(sanitized));
                    }
                }
            }
        }

        // 3. ?school= query param
        if let Some(query) = parts.uri.query() {
            for pair in query.split('&') {
                if let Some(value) = pair.strip_prefix("school=") {
                    let sanitized = Self::sanitize(value);
                    if !sanitized.is_empty() {
                        return Ok(SchoolId(sanitized));
                    }
                }
            }
        }

        Err(AppError::bad_request(
            "School could not be determined from the request",
        ))
    }
}
