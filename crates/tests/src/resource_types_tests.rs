use pretty_assertions::assert_eq;
use shared_types::{
    is_valid_case_status, is_valid_goal_status, is_valid_resource_status, is_valid_resource_type,
    is_valid_risk_level, is_valid_session_note_type, resource_type_label, CaseResponse,
    CounsellingCase,
};

use crate::common::resource;

#[test]
fn content_url_prefers_video_then_audio_then_article() {
    let mut r = resource("r1", "Everything", "SPECIAL", None);
    r.video_url = Some("https://example.org/v".to_string());
    r.audio_url = Some("https://example.org/a".to_string());
    r.article_url = Some("https://example.org/d".to_string());
    assert_eq!(r.content_url(), Some("https://example.org/v"));

    r.video_url = None;
    assert_eq!(r.content_url(), Some("https://example.org/a"));

    r.audio_url = None;
    assert_eq!(r.content_url(), Some("https://example.org/d"));

    r.article_url = None;
    assert_eq!(r.content_url(), None);
}

#[test]
fn content_url_skips_empty_strings() {
    let mut r = resource("r1", "Sparse", "VIDEO", None);
    r.video_url = Some(String::new());
    r.article_url = Some("https://example.org/d".to_string());
    assert_eq!(r.content_url(), Some("https://example.org/d"));
}

#[test]
fn type_labels_tolerate_case_variants() {
    assert_eq!(resource_type_label("VIDEO"), "Video");
    assert_eq!(resource_type_label("video"), "Video");
    assert_eq!(resource_type_label("RESEARCH_PAPER"), "Research Paper");
    assert_eq!(resource_type_label("Special"), "Special Resource");
    assert_eq!(resource_type_label("mystery"), "Resource");
}

#[test]
fn validation_constants_accept_known_values() {
    assert!(is_valid_risk_level("critical"));
    assert!(!is_valid_risk_level("Critical"));
    assert!(is_valid_case_status("monitoring"));
    assert!(!is_valid_case_status("archived"));
    assert!(is_valid_goal_status("in_progress"));
    assert!(!is_valid_goal_status("paused"));
    assert!(is_valid_resource_type("RESEARCH_PAPER"));
    assert!(!is_valid_resource_type("research_paper"));
    assert!(is_valid_resource_status("published"));
    assert!(!is_valid_resource_status("live"));
    assert!(is_valid_session_note_type("parent_meeting"));
    assert!(!is_valid_session_note_type("meeting"));
}

#[test]
fn days_open_derives_from_created_at() {
    let opened = chrono::Utc::now() - chrono::Duration::days(14);
    let row = CounsellingCase {
        id: uuid::Uuid::new_v4(),
        school_id: "northfield".to_string(),
        student_name: "Jordan Reyes".to_string(),
        assigned_counsellor: None,
        risk_level: "low".to_string(),
        status: "intake".to_string(),
        tags: vec![],
        created_at: opened,
        updated_at: opened,
        closed_at: None,
    };
    let response = CaseResponse::from_row(row, vec![], chrono::Utc::now());
    assert_eq!(response.days_open, 14);
    assert_eq!(response.assigned_counsellor, None);
}

#[test]
fn days_open_never_goes_negative() {
    let future = chrono::Utc::now() + chrono::Duration::days(2);
    let row = CounsellingCase {
        id: uuid::Uuid::new_v4(),
        school_id: "northfield".to_string(),
        student_name: "Jordan Reyes".to_string(),
        assigned_counsellor: None,
        risk_level: "low".to_string(),
        status: "intake".to_string(),
        tags: vec![],
        created_at: future,
        updated_at: future,
        closed_at: None,
    };
    let response = CaseResponse::from_row(row, vec![], chrono::Utc::now());
    assert_eq!(response.days_open, 0);
}

#[test]
fn goal_progress_serializes_raw_out_of_range_values() {
    // 150 stays 150 end to end; nothing clamps it.
    let goal = shared_types::GoalResponse {
        id: "g1".to_string(),
        case_id: "c1".to_string(),
        title: "Attend every session".to_string(),
        description: None,
        status: "in_progress".to_string(),
        target_date: None,
        progress: Some(150),
    };
    let json = serde_json::to_string(&goal).unwrap();
    let parsed: shared_types::GoalResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.progress, Some(150));
}
