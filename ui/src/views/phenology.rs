use dioxus::prelude::*;

use crate::analysis::PhenologyPanel;

#[component]
pub fn Phenology() -> Element {
    // Reactive dependency on the language signal, rendered as a hidden marker.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-local",
            h1 { {crate::t!("page-local-title")} }
            p { {crate::t!("page-local-intro")} }
            PhenologyPanel {}
        }
    }
}
