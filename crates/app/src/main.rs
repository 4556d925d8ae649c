use dioxus::prelude::*;

mod embed;
mod format_helpers;
mod routes;

use routes::Route;

/// Selected school context shared across all routes.
#[derive(Clone, Copy)]
pub struct SchoolContext {
    pub school_id: Signal<String>,
}

pub const SCHOOL_OPTIONS: &[(&str, &str)] = &[
    ("northfield", "Northfield Secondary"),
    ("riverton", "Riverton High"),
    ("lakeside", "Lakeside Academy"),
];

const THEME_BASE: Asset = asset!("/assets/theme-base.css");
const THEME_CALM: Asset = asset!("/assets/themes/calm.css");
const THEME_SAGE: Asset = asset!("/assets/themes/sage.css");
const THEME_MIDNIGHT: Asset = asset!("/assets/themes/midnight.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_feature_flags();
        let flags = server::config::feature_flags();

        server::health::record_start_time();

        let pool = server::db::create_pool();
        server::db::run_migrations(&pool).await;

        let mut router = dioxus::server::router(App).merge(server::openapi::api_router(pool));

        if flags.telemetry {
            router = router.layer(tower_http::trace::TraceLayer::new_for_http());
        }

        let router = router
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let school_id = use_signal(|| SCHOOL_OPTIONS[0].0.to_string());
    use_context_provider(|| SchoolContext { school_id });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        document::Link { rel: "stylesheet", href: THEME_CALM }
        document::Link { rel: "stylesheet", href: THEME_SAGE }
        document::Link { rel: "stylesheet", href: THEME_MIDNIGHT }
        shared_ui::ThemeSeed {}
        Router::<Route> {}
    }
}
