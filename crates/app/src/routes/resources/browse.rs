use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdArrowLeft, LdBook, LdFileText, LdGraduationCap, LdMusic, LdSearch, LdSparkles, LdStar,
    LdVideo,
};
use dioxus_free_icons::Icon;
use rand::seq::SliceRandom;
use shared_types::{
    resource_type_label, ResourceFilter, ResourceResponse, RESOURCE_TYPES,
};
use shared_ui::components::{
    Badge, BadgeVariant, Button, ButtonVariant, Carousel, CarouselItem, CarouselTrack, FormSelect,
    Input, PageHeader, PageTitle, SearchBar, Skeleton,
};

use super::card::ResourceCard;
use super::detail_modal::ResourceDetailModal;
use super::view_state::{BrowseView, Collection, FilterCriteria};
use crate::SchoolContext;

/// How many items each dashboard rail shows.
const FEATURED_SAMPLE: usize = 6;
const PRICING_RAIL_CAP: usize = 12;
const TYPE_RAIL_CAP: usize = 10;

#[component]
pub fn ResourceLibraryPage() -> Element {
    let ctx = use_context::<SchoolContext>();

    let mut view = use_signal(BrowseView::default);
    let mut criteria = use_signal(FilterCriteria::default);
    let mut viewing = use_signal(|| None::<ResourceResponse>);

    let resources_res = use_resource(move || {
        let school = ctx.school_id.read().clone();
        async move {
            server::api::list_resources(school, None, Some(true))
                .await
                .ok()
        }
    });

    let categories_res = use_resource(move || {
        let school = ctx.school_id.read().clone();
        async move {
            server::api::list_resource_categories(school, Some(true))
                .await
                .ok()
        }
    });

    // Random sample, re-shuffled whenever the collection changes. The
    // order is intentionally not stable across recomputations.
    let featured = use_memo(move || {
        let mut pool: Vec<ResourceResponse> = resources_res
            .read()
            .clone()
            .flatten()
            .unwrap_or_default();
        pool.shuffle(&mut rand::thread_rng());
        pool.truncate(FEATURED_SAMPLE);
        pool
    });

    // Single loading gate; no partial-data rendering.
    let loading = resources_res.read().is_none();
    if loading {
        return rsx! {
            div { class: "container loading",
                Skeleton {}
                Skeleton {}
                Skeleton {}
                p { class: "empty-state", "Loading resources..." }
            }
        };
    }

    let resources: Vec<ResourceResponse> = resources_res
        .read()
        .clone()
        .flatten()
        .unwrap_or_default();

    let categories: Vec<String> = categories_res
        .read()
        .clone()
        .flatten()
        .unwrap_or_default()
        .into_iter()
        .map(|c| c.category)
        .collect();

    let filter = ResourceFilter {
        query: criteria.read().query.clone(),
        resource_type: view.read().type_filter().map(String::from),
        category: criteria.read().category.clone(),
    };
    let filtered = filter.apply(&resources);

    let on_select = move |r: ResourceResponse| viewing.set(Some(r));

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle {
                    Icon { icon: LdBook, width: 24, height: 24 }
                    "Resource Library"
                }
            }
            p { class: "page-subtitle",
                "Discover intervention guides, videos, and support materials"
            }

            if view.read().is_dashboard() {
                DashboardView {
                    resources: resources.clone(),
                    featured: featured.read().clone(),
                    on_select: on_select,
                    on_view_all: move |next: BrowseView| view.set(next),
                }
            } else {
                DrilldownView {
                    heading: view.read().heading(),
                    result_count: filtered.len(),
                    categories: categories.clone(),
                    criteria: criteria,
                    filtered: filtered.clone(),
                    on_select: on_select,
                    on_back: move |_| {
                        // Back resets the filters along with the selection;
                        // the resource collection itself is untouched.
                        view.set(BrowseView::Dashboard);
                        criteria.write().reset();
                    },
                }
            }

            ResourceDetailModal {
                resource: viewing.read().clone(),
                on_close: move |_| viewing.set(None),
            }
        }
    }
}

// ── Dashboard ────────────────────────────────────────────────────

#[component]
fn DashboardView(
    resources: Vec<ResourceResponse>,
    featured: Vec<ResourceResponse>,
    on_select: EventHandler<ResourceResponse>,
    on_view_all: EventHandler<BrowseView>,
) -> Element {
    let free: Vec<ResourceResponse> = resources
        .iter()
        .filter(|r| r.is_free)
        .take(PRICING_RAIL_CAP)
        .cloned()
        .collect();
    let premium: Vec<ResourceResponse> = resources
        .iter()
        .filter(|r| !r.is_free)
        .take(PRICING_RAIL_CAP)
        .cloned()
        .collect();

    rsx! {
        div { class: "dashboard-sections",
            CarouselSection {
                title: "Featured Resources",
                icon: rsx! { Icon { icon: LdSparkles, width: 20, height: 20 } },
                resources: featured,
                on_select: on_select,
                on_view_all: move |_| {
                    on_view_all.call(BrowseView::ViewAll { collection: Collection::Featured });
                },
            }

            CarouselSection {
                title: "Free Resources",
                icon: rsx! { Icon { icon: LdSparkles, width: 20, height: 20 } },
                resources: free,
                show_free_badge: true,
                on_select: on_select,
            }

            CarouselSection {
                title: "Premium Resources",
                icon: rsx! { Icon { icon: LdStar, width: 20, height: 20 } },
                resources: premium,
                show_price_badge: true,
                on_select: on_select,
            }

            // One rail per type present in the collection; empty types
            // are suppressed entirely.
            for resource_type in RESOURCE_TYPES {
                TypeSection {
                    resource_type: resource_type.to_string(),
                    resources: resources.clone(),
                    on_select: on_select,
                    on_view_all: on_view_all,
                }
            }
        }
    }
}

#[component]
fn TypeSection(
    resource_type: String,
    resources: Vec<ResourceResponse>,
    on_select: EventHandler<ResourceResponse>,
    on_view_all: EventHandler<BrowseView>,
) -> Element {
    let type_resources: Vec<ResourceResponse> = resources
        .iter()
        .filter(|r| r.resource_type == resource_type)
        .cloned()
        .collect();

    if type_resources.is_empty() {
        return rsx! {};
    }

    let total = type_resources.len();
    let rail: Vec<ResourceResponse> = type_resources.into_iter().take(TYPE_RAIL_CAP).collect();
    let label = resource_type_label(&resource_type);
    let drilldown_type = resource_type.clone();

    rsx! {
        section { class: "rail-section",
            div { class: "rail-header",
                div { class: "rail-title",
                    {type_section_icon(&resource_type)}
                    div {
                        h2 { "{label}s" }
                        p { class: "rail-count", "{total} resources available" }
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        on_view_all.call(BrowseView::TypeDrilldown {
                            resource_type: drilldown_type.clone(),
                        });
                    },
                    "View All"
                }
            }
            Carousel {
                CarouselTrack {
                    for resource in rail {
                        CarouselItem {
                            ResourceCard { resource: resource, on_select: on_select }
                        }
                    }
                }
            }
        }
    }
}

fn type_section_icon(resource_type: &str) -> Element {
    match resource_type {
        "VIDEO" => rsx! { Icon { icon: LdVideo, width: 20, height: 20 } },
        "AUDIO" => rsx! { Icon { icon: LdMusic, width: 20, height: 20 } },
        "ARTICLE" => rsx! { Icon { icon: LdFileText, width: 20, height: 20 } },
        "RESEARCH_PAPER" => rsx! { Icon { icon: LdGraduationCap, width: 20, height: 20 } },
        _ => rsx! { Icon { icon: LdStar, width: 20, height: 20 } },
    }
}

#[component]
fn CarouselSection(
    title: String,
    icon: Element,
    resources: Vec<ResourceResponse>,
    #[props(default = false)] show_free_badge: bool,
    #[props(default = false)] show_price_badge: bool,
    on_select: EventHandler<ResourceResponse>,
    #[props(default)] on_view_all: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        section { class: "rail-section",
            div { class: "rail-header",
                div { class: "rail-title",
                    {icon}
                    h2 { "{title}" }
                }
                if let Some(handler) = on_view_all {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| handler.call(()),
                        "View All"
                    }
                }
            }
            Carousel {
                CarouselTrack {
                    for resource in resources {
                        CarouselItem {
                            ResourceCard {
                                resource: resource,
                                show_free_badge: show_free_badge,
                                show_price_badge: show_price_badge,
                                on_select: on_select,
                            }
                        }
                    }
                }
            }
        }
    }
}

// ── Drill-down ───────────────────────────────────────────────────

#[component]
fn DrilldownView(
    heading: String,
    result_count: usize,
    categories: Vec<String>,
    criteria: Signal<FilterCriteria>,
    filtered: Vec<ResourceResponse>,
    on_select: EventHandler<ResourceResponse>,
    on_back: EventHandler<()>,
) -> Element {
    let mut criteria = criteria;
    let query = criteria.read().query.clone();
    let category_value = criteria.read().category.clone().unwrap_or_default();

    rsx! {
        div { class: "drilldown",
            div { class: "drilldown-header",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_back.call(()),
                    Icon { icon: LdArrowLeft, width: 16, height: 16 }
                    "Back to Browse"
                }
                h2 { "{heading}" }
                Badge { variant: BadgeVariant::Secondary, "{result_count} Resources" }
            }

            SearchBar {
                Input {
                    value: query,
                    placeholder: "Search resources...",
                    label: "",
                    on_input: move |evt: FormEvent| {
                        criteria.write().query = evt.value().to_string();
                    },
                }
                FormSelect {
                    value: category_value,
                    onchange: move |evt: Event<FormData>| {
                        let value = evt.value();
                        criteria.write().category =
                            if value.is_empty() { None } else { Some(value) };
                    },
                    option { value: "", "All Categories" }
                    for category in categories.iter() {
                        option { value: "{category}", "{category}" }
                    }
                }
            }

            if filtered.is_empty() {
                div { class: "empty-state",
                    Icon { icon: LdSearch, width: 32, height: 32 }
                    h3 { "No resources found" }
                    p { "Try adjusting your search or filters." }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| criteria.write().reset(),
                        "Clear Filters"
                    }
                }
            } else {
                div { class: "resource-grid",
                    for resource in filtered {
                        ResourceCard { resource: resource, on_select: on_select }
                    }
                }
            }
        }
    }
}
