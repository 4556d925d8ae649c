use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBook, LdCalendar, LdExternalLink, LdMusic, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{resource_type_label, ResourceResponse};
use shared_ui::components::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    DialogContent, DialogDescription, DialogRoot, DialogTitle, Separator,
};

use super::card::DEFAULT_AUTHOR;
use crate::embed::embed_url;
use crate::format_helpers::format_date_human;

/// Sandbox grants for the embedded article/document viewer. Kept exactly
/// as broad as the product ships with; see DESIGN.md before changing.
const ARTICLE_SANDBOX: &str = "allow-same-origin allow-scripts allow-popups allow-forms";

/// Detail overlay for a selected resource. Renders nothing while no
/// resource is selected; closing clears the selection.
#[component]
pub fn ResourceDetailModal(
    resource: Option<ResourceResponse>,
    on_close: EventHandler<()>,
) -> Element {
    let Some(resource) = resource else {
        return rsx! {};
    };

    let type_label = resource_type_label(&resource.resource_type);
    let author = resource
        .author_name
        .clone()
        .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());
    let published = resource
        .published_at
        .as_deref()
        .map(format_date_human)
        .unwrap_or_else(|| "N/A".to_string());
    let open_url = resource.content_url().map(str::to_string);

    rsx! {
        DialogRoot {
            open: true,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            DialogContent { class: "dialog-content dialog-wide",
                div { class: "resource-dialog-header",
                    div { class: "resource-dialog-emblem",
                        Icon { icon: LdBook, width: 24, height: 24 }
                    }
                    div {
                        DialogTitle { "{resource.title}" }
                        DialogDescription {
                            div { class: "badge-row",
                                Badge { variant: BadgeVariant::Primary, "{type_label}" }
                                if let Some(category) = resource.category.as_ref() {
                                    Badge { variant: BadgeVariant::Secondary, "{category}" }
                                }
                            }
                        }
                    }
                }
                Separator {}

                if let Some(description) = resource.description.as_ref() {
                    Card {
                        CardHeader {
                            CardTitle { "Description" }
                        }
                        CardContent {
                            p { class: "note-section-body", "{description}" }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Information" }
                    }
                    CardContent {
                        div { class: "contact-line",
                            Icon { icon: LdUser, width: 16, height: 16 }
                            span { class: "info-label", "Author:" }
                            span { "{author}" }
                        }
                        div { class: "contact-line",
                            Icon { icon: LdCalendar, width: 16, height: 16 }
                            span { class: "info-label", "Published:" }
                            span { "{published}" }
                        }
                    }
                }

                if !resource.tags.is_empty() {
                    Card {
                        CardHeader {
                            CardTitle { "Tags" }
                        }
                        CardContent {
                            div { class: "badge-row",
                                for tag in resource.tags.iter() {
                                    Badge { variant: BadgeVariant::Outline, "#{tag}" }
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Content" }
                    }
                    CardContent {
                        div { class: "content-pane",
                            ContentPane { resource: resource.clone() }
                        }
                    }
                }

                if let Some(url) = open_url {
                    a {
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener",
                        class: "open-external",
                        Button { variant: ButtonVariant::Primary,
                            Icon { icon: LdExternalLink, width: 18, height: 18 }
                            "Open in New Tab"
                        }
                    }
                }
            }
        }
    }
}

/// Type-keyed content rendering. A type/URL mismatch leaves the pane
/// empty rather than erroring.
#[component]
fn ContentPane(resource: ResourceResponse) -> Element {
    match resource.resource_type.to_uppercase().as_str() {
        "VIDEO" => {
            if let Some(video_url) = resource.video_url.as_ref().filter(|u| !u.is_empty()) {
                let src = embed_url(video_url);
                return rsx! {
                    iframe {
                        src: "{src}",
                        class: "content-frame",
                        title: "{resource.title}",
                        allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                        allowfullscreen: true,
                    }
                };
            }
            rsx! {}
        }
        "AUDIO" => {
            if let Some(audio_url) = resource.audio_url.as_ref().filter(|u| !u.is_empty()) {
                return rsx! {
                    div { class: "audio-pane",
                        div { class: "audio-emblem",
                            Icon { icon: LdMusic, width: 64, height: 64 }
                        }
                        audio {
                            controls: true,
                            src: "{audio_url}",
                            "Your browser does not support the audio element."
                        }
                    }
                };
            }
            rsx! {}
        }
        "ARTICLE" | "RESEARCH_PAPER" | "SPECIAL" => {
            if let Some(article_url) = resource.article_url.as_ref().filter(|u| !u.is_empty()) {
                return rsx! {
                    iframe {
                        src: "{article_url}",
                        class: "content-frame",
                        title: "{resource.title}",
                        sandbox: ARTICLE_SANDBOX,
                    }
                };
            }
            rsx! {}
        }
        _ => rsx! {},
    }
}
