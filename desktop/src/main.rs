#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config, LogicalSize};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Bloom, Home, Phenology};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/local")]
    Phenology {},
    #[route("/remote")]
    Bloom {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme from ui/assets/theme/main.css, embedded at compile time.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Phenoview – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(1280.0, 860.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_local(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Phenology {}, "{label}" })
}
fn nav_remote(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Bloom {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar updates this through context when the user picks a language.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        home: nav_home,
        local: nav_local,
        remote: nav_remote,
    });

    tracing::info!(endpoint = %ui::core::config::get().endpoint, "phenoview desktop starting");

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed by language so the routed subtree remounts on a switch.
        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop-specific layout so the shared navbar can sit above this crate's `Route` outlet.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
