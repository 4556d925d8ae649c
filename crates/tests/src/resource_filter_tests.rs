use pretty_assertions::assert_eq;
use shared_types::ResourceFilter;

use crate::common::resource;

fn sample_library() -> Vec<shared_types::ResourceResponse> {
    vec![
        resource("r1", "Anxiety Toolkit", "VIDEO", Some("Wellbeing")),
        resource("r2", "Grounding Exercises", "AUDIO", Some("Wellbeing")),
        resource("r3", "Exam Stress Guide", "ARTICLE", Some("Academic")),
        resource("r4", "Peer Mediation Handbook", "ARTICLE", Some("Conflict")),
        resource("r5", "Sleep Hygiene Basics", "VIDEO", None),
    ]
}

#[test]
fn empty_filter_is_a_pass_through() {
    let library = sample_library();
    let result = ResourceFilter::default().apply(&library);
    assert_eq!(result, library);
}

#[test]
fn result_is_an_ordered_subsequence() {
    let library = sample_library();
    let filter = ResourceFilter {
        resource_type: Some("ARTICLE".to_string()),
        ..Default::default()
    };
    let result = filter.apply(&library);

    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r3", "r4"]);

    // Every included item satisfies the predicate; no excluded item does.
    for item in &library {
        let included = ids.contains(&item.id.as_str());
        assert_eq!(filter.matches(item), included, "item {}", item.id);
    }
}

#[test]
fn query_matches_title_case_insensitively() {
    let library = sample_library();
    let filter = ResourceFilter {
        query: "ANX".to_string(),
        ..Default::default()
    };
    let result = filter.apply(&library);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Anxiety Toolkit");
}

#[test]
fn query_matches_description_too() {
    let mut item = resource("r9", "Untitled Handout", "ARTICLE", None);
    item.description = Some("Breathing techniques for panic episodes".to_string());

    let filter = ResourceFilter {
        query: "breathing".to_string(),
        ..Default::default()
    };
    assert!(filter.matches(&item));
}

#[test]
fn missing_description_matches_as_empty_string() {
    // Must not fail against an absent description; it simply doesn't match.
    let item = resource("r9", "Untitled", "ARTICLE", None);
    let filter = ResourceFilter {
        query: "breathing".to_string(),
        ..Default::default()
    };
    assert!(!filter.matches(&item));
}

#[test]
fn type_match_is_exact_and_case_sensitive() {
    let item = resource("r1", "Anxiety Toolkit", "VIDEO", None);

    let exact = ResourceFilter {
        resource_type: Some("VIDEO".to_string()),
        ..Default::default()
    };
    assert!(exact.matches(&item));

    // Types compare as stored — a lowercase selection does not match.
    let lowercase = ResourceFilter {
        resource_type: Some("video".to_string()),
        ..Default::default()
    };
    assert!(!lowercase.matches(&item));
}

#[test]
fn category_match_is_exact() {
    let library = sample_library();
    let filter = ResourceFilter {
        category: Some("Wellbeing".to_string()),
        ..Default::default()
    };
    let result = filter.apply(&library);
    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r2"]);
}

#[test]
fn absent_category_never_matches_a_category_filter() {
    let item = resource("r5", "Sleep Hygiene Basics", "VIDEO", None);
    let filter = ResourceFilter {
        category: Some("Wellbeing".to_string()),
        ..Default::default()
    };
    assert!(!filter.matches(&item));
}

#[test]
fn criteria_are_conjunctive() {
    let library = sample_library();
    let filter = ResourceFilter {
        query: "toolkit".to_string(),
        resource_type: Some("VIDEO".to_string()),
        category: Some("Wellbeing".to_string()),
    };
    let result = filter.apply(&library);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "r1");

    // Same query, wrong type — conjunction fails.
    let mismatched = ResourceFilter {
        resource_type: Some("AUDIO".to_string()),
        ..filter
    };
    assert!(mismatched.apply(&library).is_empty());
}

#[test]
fn apply_leaves_the_input_untouched() {
    let library = sample_library();
    let before = library.clone();
    let filter = ResourceFilter {
        query: "guide".to_string(),
        ..Default::default()
    };
    let _ = filter.apply(&library);
    assert_eq!(library, before);
}
