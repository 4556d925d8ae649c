use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdFileText, LdGraduationCap, LdMusic, LdSparkles, LdStar, LdVideo,
};
use dioxus_free_icons::Icon;
use shared_types::{resource_type_label, ResourceResponse};

use crate::format_helpers::format_duration_mmss;

/// Display fallback when a resource carries no author.
pub const DEFAULT_AUTHOR: &str = "WellNest";

fn type_icon(resource_type: &str) -> Element {
    match resource_type.to_uppercase().as_str() {
        "VIDEO" => rsx! { Icon { icon: LdVideo, width: 48, height: 48 } },
        "AUDIO" => rsx! { Icon { icon: LdMusic, width: 48, height: 48 } },
        "ARTICLE" => rsx! { Icon { icon: LdFileText, width: 48, height: 48 } },
        "RESEARCH_PAPER" => rsx! { Icon { icon: LdGraduationCap, width: 48, height: 48 } },
        "SPECIAL" => rsx! { Icon { icon: LdStar, width: 48, height: 48 } },
        _ => rsx! { Icon { icon: LdSparkles, width: 48, height: 48 } },
    }
}

/// Whether the card shows a duration badge for this type.
fn shows_duration(resource_type: &str) -> bool {
    matches!(
        resource_type.to_uppercase().as_str(),
        "VIDEO" | "AUDIO" | "SPECIAL"
    )
}

/// A resource tile used in both the carousels and the drill-down grid.
#[component]
pub fn ResourceCard(
    resource: ResourceResponse,
    /// Show a "FREE" corner badge.
    #[props(default = false)]
    show_free_badge: bool,
    /// Show the price corner badge for paid material.
    #[props(default = false)]
    show_price_badge: bool,
    on_select: EventHandler<ResourceResponse>,
) -> Element {
    let type_label = resource_type_label(&resource.resource_type);
    let author = resource
        .author_name
        .clone()
        .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());
    let price = resource.price.unwrap_or(0.0);
    let duration = resource
        .duration_seconds
        .filter(|_| shows_duration(&resource.resource_type))
        .map(format_duration_mmss);
    let selected = resource.clone();

    rsx! {
        div {
            class: "resource-card",
            onclick: move |_| on_select.call(selected.clone()),
            div { class: "resource-thumb",
                if let Some(url) = resource.thumbnail_url.as_ref() {
                    img { src: "{url}", alt: "{resource.title}" }
                } else {
                    div { class: "resource-thumb-fallback",
                        {type_icon(&resource.resource_type)}
                    }
                }
                if show_free_badge {
                    span { class: "corner-badge free", "FREE" }
                }
                if show_price_badge {
                    span { class: "corner-badge price", "${price}" }
                }
                if let Some(duration) = duration {
                    span { class: "corner-badge duration", "{duration}" }
                } else {
                    span { class: "corner-badge type", "{type_label}" }
                }
            }
            div { class: "resource-card-body",
                h3 { "{resource.title}" }
                div { class: "resource-card-meta",
                    if let Some(category) = resource.category.as_ref() {
                        span { class: "resource-category", "{category}" }
                        span { "•" }
                    }
                    span { "{author}" }
                }
            }
        }
    }
}
