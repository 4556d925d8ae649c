use dioxus::prelude::*;

/// Horizontal media rail. Items scroll sideways with snap points; the
/// track overflows the container so edge items peek into view.
#[component]
pub fn Carousel(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "carousel", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Scrollable track holding the carousel items.
#[component]
pub fn CarouselTrack(children: Element) -> Element {
    rsx! {
        div { class: "carousel-track", {children} }
    }
}

/// A single fixed-width cell in the track.
#[component]
pub fn CarouselItem(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "carousel-item",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
