//! Shared builders for test fixtures.

use shared_types::{CaseResponse, ParentContactResponse, ResourceResponse};

/// A resource with the given title/type/category and everything else defaulted.
pub fn resource(id: &str, title: &str, resource_type: &str, category: Option<&str>) -> ResourceResponse {
    ResourceResponse {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        resource_type: resource_type.to_string(),
        category: category.map(str::to_string),
        tags: Vec::new(),
        thumbnail_url: None,
        video_url: None,
        audio_url: None,
        article_url: None,
        is_free: true,
        price: None,
        author_name: None,
        duration_seconds: None,
        published_at: None,
    }
}

/// A parent contact with the given name and primary flag.
pub fn parent(name: &str, is_primary: bool) -> ParentContactResponse {
    ParentContactResponse {
        id: format!("{name}-id"),
        name: name.to_string(),
        relationship: None,
        phone: None,
        email: None,
        is_primary,
        consent_given: None,
    }
}

/// A case with the given risk level and contacts.
pub fn case(risk_level: &str, parents: Vec<ParentContactResponse>) -> CaseResponse {
    CaseResponse {
        id: "case-1".to_string(),
        student_name: "Jordan Reyes".to_string(),
        assigned_counsellor: Some("M. Okafor".to_string()),
        risk_level: risk_level.to_string(),
        status: "active".to_string(),
        tags: Vec::new(),
        parents,
        created_at: "2026-05-01T09:00:00Z".to_string(),
        days_open: 14,
        closed_at: None,
    }
}
