use dioxus::prelude::*;

/// A horizontal progress bar.
///
/// The fill width is the raw `value` as a percentage — values outside
/// 0-100 are rendered as-is, so callers own any clamping they want.
#[component]
pub fn Progress(
    value: i32,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "progress", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: "progressbar",
            aria_valuenow: "{value}",
            ..merged,
            div {
                class: "progress-indicator",
                style: "width: {value}%",
            }
        }
    }
}
