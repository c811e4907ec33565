use dioxus::prelude::*;

use crate::bloom::BloomPanel;

#[component]
pub fn Bloom() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-remote",
            h1 { {crate::t!("page-remote-title")} }
            p { {crate::t!("page-remote-intro")} }
            BloomPanel {}
        }
    }
}
