use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    tracing::trace!(lang = %lang_marker, "home render");

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-tagline-short")} }
            p { {crate::t!("home-intro")} }

            ul { class: "page-home__features",
                li { {crate::t!("home-feature-local")} }
                li { {crate::t!("home-feature-remote")} }
                li { {crate::t!("home-feature-map")} }
            }
            p { class: "page-home__cta",
                {crate::t!("home-cta")}
            }
        }
    }
}
