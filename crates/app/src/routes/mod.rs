pub mod cases;
pub mod not_found;
pub mod resources;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdHeart};
use dioxus_free_icons::Icon;
use shared_ui::components::{FormSelect, Navbar, NavbarNav};
use shared_ui::theme::{ThemeFamily, ThemeState, ALL_FAMILIES};

use crate::{SchoolContext, SCHOOL_OPTIONS};
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    CaseList {},
    #[route("/resources")]
    ResourceLibrary {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn CaseList() -> Element {
    cases::list::CaseListPage()
}

#[component]
fn ResourceLibrary() -> Element {
    resources::browse::ResourceLibraryPage()
}

#[component]
fn AppLayout() -> Element {
    let ctx = use_context::<SchoolContext>();
    let mut school_id = ctx.school_id;

    let family = use_signal(|| ThemeFamily::default().as_str().to_string());
    let is_dark = use_signal(|| false);
    let theme = use_context_provider(|| ThemeState { family, is_dark });

    let family_options: Vec<(&str, &str)> = ALL_FAMILIES
        .iter()
        .map(|f| (f.as_str(), f.display_name()))
        .collect();

    rsx! {
        Navbar {
            span { class: "navbar-brand",
                Icon { icon: LdHeart, width: 20, height: 20 }
                "WellNest"
            }
            NavbarNav {
                Link { to: Route::CaseList {}, class: "navbar-item",
                    "Cases"
                }
                Link { to: Route::ResourceLibrary {}, class: "navbar-item",
                    Icon { icon: LdBookOpen, width: 14, height: 14 }
                    "Resources"
                }
            }
            div { class: "navbar-controls",
                FormSelect {
                    value: "{school_id}",
                    onchange: move |e: Event<FormData>| school_id.set(e.value()),
                    for (id, name) in SCHOOL_OPTIONS {
                        option { value: "{id}", "{name}" }
                    }
                }
                FormSelect {
                    value: "{family}",
                    onchange: move |e: Event<FormData>| {
                        let mut family = theme.family;
                        family.set(e.value());
                        theme.apply();
                    },
                    for (key, name) in family_options {
                        option { value: "{key}", "{name}" }
                    }
                }
            }
        }
        Outlet::<Route> {}
    }
}
