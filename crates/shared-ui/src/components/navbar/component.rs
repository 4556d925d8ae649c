use dioxus::prelude::*;

/// Top navigation bar.
#[component]
pub fn Navbar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "navbar", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header {
            ..merged,
            {children}
        }
    }
}

/// Horizontal group of navigation links. Style links with the
/// `navbar-item` class.
#[component]
pub fn NavbarNav(children: Element) -> Element {
    rsx! {
        nav { class: "navbar-nav", {children} }
    }
}
