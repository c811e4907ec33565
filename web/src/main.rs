use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Bloom, Home, Phenology};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/local")]
    Phenology {},
    #[route("/remote")]
    Bloom {},
}

// The shared theme lives in the ui crate; inline it so the web bundle needs no extra asset.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_local(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Phenology {},
        "{label}"
    })
}
fn nav_remote(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Bloom {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        home: nav_home,
        local: nav_local,
        remote: nav_remote,
    });

    // Language code shared with AppNavbar so pages re-render on a switch.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    tracing::info!(endpoint = %ui::core::config::get().endpoint, "phenoview web starting");

    rsx! {
        document::Title { "Phenoview" }
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Web-specific layout so the shared navbar can sit above this crate's `Route` outlet.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
