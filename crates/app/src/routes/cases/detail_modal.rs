use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdClock, LdFileText, LdMail, LdPhone, LdTarget, LdUser, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{CaseResponse, GoalResponse, ParentContactResponse, SessionNoteResponse};
use shared_ui::components::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, DialogContent,
    DialogRoot, DialogTitle, Progress, Skeleton, TabContent, TabList, TabTrigger, Tabs,
};

use crate::format_helpers::{
    format_date_human, format_snake_case_title, goal_status_badge_variant, risk_badge_variant,
    status_badge_variant,
};
use crate::SchoolContext;

/// Read-only case summary shown as an overlay from the case list.
///
/// Renders nothing at all while no case is selected.
#[component]
pub fn CaseDetailModal(case_item: Option<CaseResponse>, on_close: EventHandler<()>) -> Element {
    let Some(case_data) = case_item else {
        return rsx! {};
    };

    rsx! {
        DialogRoot {
            open: true,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle {
                    Icon { icon: LdFileText, width: 20, height: 20 }
                    "Case Details"
                }
                CaseDetailBody { case_data: case_data }
            }
        }
    }
}

#[component]
fn CaseDetailBody(case_data: CaseResponse) -> Element {
    let ctx = use_context::<SchoolContext>();
    let case_id = case_data.id.clone();

    let notes = use_resource(move || {
        let school = ctx.school_id.read().clone();
        let cid = case_id.clone();
        async move { server::api::list_session_notes(school, cid).await.ok() }
    });

    let goal_case_id = case_data.id.clone();
    let goals = use_resource(move || {
        let school = ctx.school_id.read().clone();
        let cid = goal_case_id.clone();
        async move { server::api::list_goals(school, cid).await.ok() }
    });

    let risk_variant = risk_badge_variant(&case_data.risk_level);
    let status_variant = status_badge_variant(&case_data.status);
    let display_risk = format_snake_case_title(&case_data.risk_level);
    let counsellor = case_data
        .assigned_counsellor
        .clone()
        .unwrap_or_else(|| "Unassigned".to_string());
    let created = if case_data.created_at.is_empty() {
        "N/A".to_string()
    } else {
        format_date_human(&case_data.created_at)
    };

    let show_emergency = case_data.is_high_risk() && !case_data.parents.is_empty();
    let emergency = case_data.emergency_contact().cloned();

    let note_count = notes
        .read()
        .as_ref()
        .and_then(|n| n.as_ref().map(|v| v.len()))
        .unwrap_or(0);
    let goal_count = goals
        .read()
        .as_ref()
        .and_then(|g| g.as_ref().map(|v| v.len()))
        .unwrap_or(0);

    rsx! {
        // Case overview
        Card {
            CardHeader {
                CardTitle {
                    span { "Case Overview" }
                    div { class: "badge-row",
                        Badge { variant: risk_variant, "{display_risk} Risk" }
                        Badge { variant: status_variant, "{case_data.status}" }
                    }
                }
            }
            CardContent {
                div { class: "detail-grid",
                    div {
                        div { class: "detail-label",
                            Icon { icon: LdUser, width: 16, height: 16 }
                            span { "Student" }
                        }
                        p { class: "detail-value", "{case_data.student_name}" }
                    }
                    div {
                        div { class: "detail-label",
                            Icon { icon: LdUsers, width: 16, height: 16 }
                            span { "Assigned Counsellor" }
                        }
                        p { class: "detail-value", "{counsellor}" }
                    }
                    div {
                        div { class: "detail-label",
                            Icon { icon: LdCalendar, width: 16, height: 16 }
                            span { "Created Date" }
                        }
                        p { class: "detail-value", "{created}" }
                    }
                    div {
                        div { class: "detail-label",
                            Icon { icon: LdClock, width: 16, height: 16 }
                            span { "Days Open" }
                        }
                        p { class: "detail-value", "{case_data.days_open} days" }
                    }
                }

                div { class: "detail-grid",
                    if !case_data.tags.is_empty() {
                        div {
                            p { class: "detail-label", "Tags" }
                            div { class: "badge-row",
                                for tag in case_data.tags.iter() {
                                    Badge { variant: BadgeVariant::Outline, "{tag}" }
                                }
                            }
                        }
                    }

                    // Shown prominently only for high/critical risk
                    if show_emergency {
                        if let Some(contact) = emergency {
                            div {
                                p { class: "detail-label",
                                    Icon { icon: LdUsers, width: 16, height: 16 }
                                    "Emergency Contact"
                                }
                                EmergencyContactCard { contact: contact }
                            }
                        }
                    }
                }
            }
        }

        // Full parent/guardian information, independent of risk level
        if !case_data.parents.is_empty() {
            Card {
                CardHeader {
                    CardTitle {
                        Icon { icon: LdUsers, width: 20, height: 20 }
                        "All Parent/Guardian Contacts"
                    }
                }
                CardContent {
                    div { class: "detail-grid",
                        for parent in case_data.parents.iter() {
                            ParentContactCard { contact: parent.clone() }
                        }
                    }
                }
            }
        }

        Tabs { default_value: "notes", horizontal: true,
            TabList {
                TabTrigger { value: "notes", index: 0usize,
                    Icon { icon: LdFileText, width: 16, height: 16 }
                    "Session Notes ({note_count})"
                }
                TabTrigger { value: "goals", index: 1usize,
                    Icon { icon: LdTarget, width: 16, height: 16 }
                    "Goals ({goal_count})"
                }
            }
            TabContent { value: "notes", index: 0usize,
                match &*notes.read() {
                    Some(Some(notes)) => rsx! {
                        SessionNoteList { notes: notes.clone() }
                    },
                    Some(None) => rsx! {
                        p { class: "error-state", "Failed to load session notes." }
                    },
                    None => rsx! {
                        Skeleton {}
                    },
                }
            }
            TabContent { value: "goals", index: 1usize,
                match &*goals.read() {
                    Some(Some(goals)) => rsx! {
                        GoalList { goals: goals.clone() }
                    },
                    Some(None) => rsx! {
                        p { class: "error-state", "Failed to load goals." }
                    },
                    None => rsx! {
                        Skeleton {}
                    },
                }
            }
        }
    }
}

#[component]
fn EmergencyContactCard(contact: ParentContactResponse) -> Element {
    rsx! {
        div { class: "emergency-contact",
            div { class: "badge-row",
                span { class: "contact-name", "{contact.name}" }
                if let Some(relationship) = contact.relationship.as_ref() {
                    Badge { variant: BadgeVariant::Outline, "{relationship}" }
                }
            }
            if let Some(phone) = contact.phone.as_ref() {
                div { class: "contact-line",
                    Icon { icon: LdPhone, width: 14, height: 14 }
                    a { href: "tel:{phone}", "{phone}" }
                }
            }
            if let Some(email) = contact.email.as_ref() {
                div { class: "contact-line",
                    Icon { icon: LdMail, width: 14, height: 14 }
                    a { href: "mailto:{email}", "{email}" }
                }
            }
        }
    }
}

#[component]
fn ParentContactCard(contact: ParentContactResponse) -> Element {
    rsx! {
        div { class: "parent-card",
            div { class: "parent-card-header",
                h4 { "{contact.name}" }
                if let Some(relationship) = contact.relationship.as_ref() {
                    Badge { variant: BadgeVariant::Outline, "{relationship}" }
                }
            }
            if let Some(phone) = contact.phone.as_ref() {
                div { class: "contact-line",
                    Icon { icon: LdPhone, width: 16, height: 16 }
                    a { href: "tel:{phone}", "{phone}" }
                }
            }
            if let Some(email) = contact.email.as_ref() {
                div { class: "contact-line",
                    Icon { icon: LdMail, width: 16, height: 16 }
                    a { href: "mailto:{email}", "{email}" }
                }
            }
            if contact.is_primary {
                Badge { variant: BadgeVariant::Secondary, "Primary Contact" }
            }
            // Absent consent renders nothing; an explicit value always shows.
            if let Some(consent) = contact.consent_given {
                div { class: "consent-line",
                    if consent { "Consent: ✓ Given" } else { "Consent: ✗ Not Given" }
                }
            }
        }
    }
}

#[component]
fn SessionNoteList(notes: Vec<SessionNoteResponse>) -> Element {
    if notes.is_empty() {
        return rsx! {
            Card {
                CardContent {
                    div { class: "empty-state",
                        Icon { icon: LdFileText, width: 48, height: 48 }
                        p { "No session notes recorded" }
                    }
                }
            }
        };
    }

    rsx! {
        for note in notes {
            SessionNoteCard { note: note }
        }
    }
}

#[component]
fn SessionNoteCard(note: SessionNoteResponse) -> Element {
    let title = format_snake_case_title(&note.note_type);
    let date = if note.session_date.is_empty() {
        "N/A".to_string()
    } else {
        format_date_human(&note.session_date)
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    span { "{title}" }
                    span { class: "detail-label",
                        Icon { icon: LdCalendar, width: 16, height: 16 }
                        "{date}"
                    }
                }
                if let Some(minutes) = note.duration_minutes {
                    CardDescription {
                        Icon { icon: LdClock, width: 12, height: 12 }
                        "{minutes} minutes"
                    }
                }
            }
            CardContent {
                if let Some(summary) = note.summary.as_ref() {
                    div { class: "note-section",
                        p { class: "note-section-title", "Summary" }
                        p { class: "note-section-body", "{summary}" }
                    }
                }
                if let Some(interventions) = note.interventions.as_ref() {
                    div { class: "note-section",
                        p { class: "note-section-title", "Interventions" }
                        p { class: "note-section-body", "{interventions}" }
                    }
                }
                if let Some(next_steps) = note.next_steps.as_ref() {
                    div { class: "note-section",
                        p { class: "note-section-title", "Next Steps" }
                        p { class: "note-section-body", "{next_steps}" }
                    }
                }
            }
        }
    }
}

#[component]
fn GoalList(goals: Vec<GoalResponse>) -> Element {
    if goals.is_empty() {
        return rsx! {
            Card {
                CardContent {
                    div { class: "empty-state",
                        Icon { icon: LdTarget, width: 48, height: 48 }
                        p { "No goals set" }
                    }
                }
            }
        };
    }

    rsx! {
        for goal in goals {
            GoalCard { goal: goal }
        }
    }
}

#[component]
fn GoalCard(goal: GoalResponse) -> Element {
    let status_variant = goal_status_badge_variant(&goal.status);
    let display_status = goal.status.replace('_', " ");
    let target = goal.target_date.as_deref().map(format_date_human);

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    span { "{goal.title}" }
                    Badge { variant: status_variant, "{display_status}" }
                }
                if let Some(target) = target {
                    CardDescription {
                        Icon { icon: LdCalendar, width: 12, height: 12 }
                        "Target: {target}"
                    }
                }
            }
            CardContent {
                if let Some(description) = goal.description.as_ref() {
                    p { class: "note-section-body", "{description}" }
                }
                if let Some(progress) = goal.progress {
                    div { class: "goal-progress",
                        div { class: "goal-progress-label",
                            span { "Progress" }
                            span { "{progress}%" }
                        }
                        Progress { value: progress }
                    }
                }
            }
        }
    }
}
