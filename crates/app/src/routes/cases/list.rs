use dioxus::prelude::*;
use shared_types::CaseResponse;
use shared_ui::components::{
    Badge, Button, ButtonVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, FormSelect, Input, PageHeader, PageTitle,
    SearchBar, Skeleton,
};

use super::detail_modal::CaseDetailModal;
use crate::format_helpers::{
    format_date_human, format_snake_case_title, risk_badge_variant, status_badge_variant,
};
use crate::SchoolContext;

#[component]
pub fn CaseListPage() -> Element {
    let ctx = use_context::<SchoolContext>();

    let mut filter_status = use_signal(String::new);
    let mut filter_risk = use_signal(String::new);
    let mut search_query = use_signal(String::new);
    let mut selected_case = use_signal(|| None::<CaseResponse>);

    let data = use_resource(move || {
        let school = ctx.school_id.read().clone();
        let st = filter_status.read().clone();
        let risk = filter_risk.read().clone();
        let q = search_query.read().clone();
        async move {
            server::api::search_cases(
                school,
                if st.is_empty() { None } else { Some(st) },
                if risk.is_empty() { None } else { Some(risk) },
                if q.is_empty() { None } else { Some(q) },
                None,
                None,
            )
            .await
            .ok()
        }
    });

    let handle_clear = move |_| {
        filter_status.set(String::new());
        filter_risk.set(String::new());
        search_query.set(String::new());
    };

    let has_filters = !filter_status.read().is_empty()
        || !filter_risk.read().is_empty()
        || !search_query.read().is_empty();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Cases" }
            }

            SearchBar {
                Input {
                    value: search_query.read().clone(),
                    placeholder: "Search by student name...",
                    label: "",
                    on_input: move |evt: FormEvent| {
                        search_query.set(evt.value().to_string());
                    },
                }
                FormSelect {
                    value: "{filter_status}",
                    onchange: move |evt: Event<FormData>| {
                        filter_status.set(evt.value().to_string());
                    },
                    option { value: "", "All Statuses" }
                    option { value: "intake", "Intake" }
                    option { value: "assessment", "Assessment" }
                    option { value: "intervention", "Intervention" }
                    option { value: "monitoring", "Monitoring" }
                    option { value: "active", "Active" }
                    option { value: "closed", "Closed" }
                }
                FormSelect {
                    value: "{filter_risk}",
                    onchange: move |evt: Event<FormData>| {
                        filter_risk.set(evt.value().to_string());
                    },
                    option { value: "", "All Risk Levels" }
                    option { value: "low", "Low" }
                    option { value: "medium", "Medium" }
                    option { value: "high", "High" }
                    option { value: "critical", "Critical" }
                }
                if has_filters {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: handle_clear,
                        "Clear Filters"
                    }
                }
            }

            match &*data.read() {
                Some(Some(resp)) => rsx! {
                    CaseTable {
                        cases: resp.cases.clone(),
                        on_select: move |c: CaseResponse| selected_case.set(Some(c)),
                    }
                },
                Some(None) => rsx! {
                    Card {
                        CardContent {
                            p { "No cases found for this school." }
                        }
                    }
                },
                None => rsx! {
                    div { class: "loading",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                },
            }

            CaseDetailModal {
                case_item: selected_case.read().clone(),
                on_close: move |_| selected_case.set(None),
            }
        }
    }
}

#[component]
fn CaseTable(cases: Vec<CaseResponse>, on_select: EventHandler<CaseResponse>) -> Element {
    if cases.is_empty() {
        return rsx! {
            Card {
                CardContent {
                    p { "No cases found." }
                }
            }
        };
    }

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Student" }
                DataTableColumn { "Counsellor" }
                DataTableColumn { "Risk" }
                DataTableColumn { "Status" }
                DataTableColumn { "Opened" }
                DataTableColumn { "Days Open" }
            }
            DataTableBody {
                for c in cases {
                    CaseRow { case_item: c, on_select: on_select }
                }
            }
        }
    }
}

#[component]
fn CaseRow(case_item: CaseResponse, on_select: EventHandler<CaseResponse>) -> Element {
    let risk_variant = risk_badge_variant(&case_item.risk_level);
    let status_variant = status_badge_variant(&case_item.status);
    let display_risk = format_snake_case_title(&case_item.risk_level);
    let display_status = format_snake_case_title(&case_item.status);
    let display_date = format_date_human(&case_item.created_at);
    let counsellor = case_item
        .assigned_counsellor
        .clone()
        .unwrap_or_else(|| "Unassigned".to_string());
    let row_case = case_item.clone();

    rsx! {
        DataTableRow {
            onclick: move |_| on_select.call(row_case.clone()),
            DataTableCell { "{case_item.student_name}" }
            DataTableCell { "{counsellor}" }
            DataTableCell {
                Badge { variant: risk_variant, "{display_risk}" }
            }
            DataTableCell {
                Badge { variant: status_variant, "{display_status}" }
            }
            DataTableCell { "{display_date}" }
            DataTableCell { "{case_item.days_open} days" }
        }
    }
}
