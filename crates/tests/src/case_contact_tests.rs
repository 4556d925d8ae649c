use pretty_assertions::assert_eq;

use crate::common::{case, parent};

#[test]
fn primary_contact_wins_over_list_order() {
    let c = case("high", vec![parent("A", false), parent("B", true)]);
    assert_eq!(c.emergency_contact().unwrap().name, "B");
}

#[test]
fn no_primary_falls_back_to_first_in_list_order() {
    let c = case("high", vec![parent("A", false), parent("B", false)]);
    assert_eq!(c.emergency_contact().unwrap().name, "A");
}

#[test]
fn first_primary_wins_when_several_are_flagged() {
    let c = case(
        "critical",
        vec![parent("A", false), parent("B", true), parent("C", true)],
    );
    assert_eq!(c.emergency_contact().unwrap().name, "B");
}

#[test]
fn no_parents_means_no_contact() {
    let c = case("critical", vec![]);
    assert!(c.emergency_contact().is_none());
}

#[test]
fn medium_risk_does_not_warrant_the_callout() {
    let c = case("medium", vec![parent("A", true)]);
    assert!(!c.is_high_risk());
}

#[test]
fn risk_gating_tolerates_case_variants() {
    assert!(case("Critical", vec![parent("A", false)]).is_high_risk());
    assert!(case("HIGH", vec![]).is_high_risk());
    assert!(!case("Low", vec![]).is_high_risk());
}

#[test]
fn selection_ignores_contact_details_entirely() {
    let mut reachable = parent("A", false);
    reachable.phone = Some("0412 000 111".to_string());
    let unreachable = parent("B", true);

    // The primary flag decides even when the primary has no phone/email.
    let c = case("high", vec![reachable, unreachable]);
    assert_eq!(c.emergency_contact().unwrap().name, "B");
}
