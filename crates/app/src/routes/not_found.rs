use dioxus::prelude::*;
use shared_ui::components::{Card, CardContent};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "container",
            Card {
                CardContent {
                    h2 { "Page not found" }
                    p { "The page /{path} does not exist." }
                }
            }
        }
    }
}
