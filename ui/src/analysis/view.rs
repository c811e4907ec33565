use dioxus::prelude::*;

use super::{analyze, MISSING_FILE_MESSAGE, PROCESS_ERROR_PREFIX};
use crate::chart::{ChartStyle, SeriesChart};
use crate::core::config;
use crate::core::upload::{self, UploadedFile};
use crate::map::MapView;
use crate::t;

/// Local XML analysis: one file in, series chart plus the phenology report and
/// per-month interpretation out.
#[component]
pub fn PhenologyPanel() -> Element {
    let mut file = use_signal(|| Result::<Option<UploadedFile>, String>::Ok(None));
    let mut files_line = use_signal(String::new);
    let mut results = use_signal(String::new);
    let mut explanation = use_signal(String::new);
    let mut series = use_signal(Vec::<f64>::new);

    let on_pick = move |evt: FormEvent| async move {
        let picked = upload::first_file(&evt).await.map_err(|err| err.to_string());
        file.set(picked);
    };

    let process = move |_| {
        let current = file.read().clone();
        match current {
            Ok(None) => files_line.set(MISSING_FILE_MESSAGE.to_string()),
            Ok(Some(picked)) => {
                let analysis = analyze(&picked.text(), &mut rand::thread_rng());
                tracing::info!(file = %picked.name, kind = %analysis.kind, "local analysis finished");
                files_line.set(analysis.status_message());
                series.set(analysis.series);
                results.set(analysis.report);
                explanation.set(analysis.explanation);
            }
            Err(err) => {
                tracing::error!(%err, "local analysis failed");
                results.set(format!("{PROCESS_ERROR_PREFIX}{err}"));
            }
        }
    };

    rsx! {
        div { class: "panel-grid",
            section { class: "results-card phenology-panel",
                div { class: "results-card__header",
                    h2 { {t!("local-input-title")} }
                }
                label { class: "file-field",
                    span { class: "file-field__label", {t!("local-file-label")} }
                    input {
                        r#type: "file",
                        accept: ".xml",
                        onchange: on_pick,
                    }
                }
                div { class: "panel-actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: process,
                        {t!("local-process")}
                    }
                }
                p { class: "results-card__meta output-files", "{files_line}" }
            }

            SeriesChart { values: series(), style: ChartStyle::PHENOLOGY }

            section { class: "results-card",
                div { class: "results-card__header",
                    h2 { {t!("local-report-title")} }
                }
                pre { class: "report-block", "{results}" }
            }

            section { class: "results-card",
                div { class: "results-card__header",
                    h2 { {t!("local-explanation-title")} }
                }
                pre { class: "report-block", "{explanation}" }
            }

            section { class: "results-card map-card",
                MapView { config: config::get().phenology_map.clone() }
            }
        }
    }
}
