use dioxus::prelude::*;

use super::status::StatusMessage;
use super::view_model::{ResultView, Section, SectionBody};
use crate::chart::{ChartStyle, SeriesChart};
use crate::core::config;
use crate::core::remote::{self, ProcessClient};
use crate::core::upload::{self, UploadedFile};
use crate::map::MapView;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
enum Output {
    Placeholder,
    Status(StatusMessage),
    Report(Vec<Section>),
}

/// LUT + data submission to the processing service, with the rendered report,
/// a summary chart of the NDVI statistics and the area map.
#[component]
pub fn BloomPanel() -> Element {
    let mut lut = use_signal(|| None::<UploadedFile>);
    let mut data = use_signal(|| None::<UploadedFile>);
    let mut output = use_signal(|| Output::Status(StatusMessage::welcome()));
    let mut chart = use_signal(Vec::<f64>::new);
    let mut busy = use_signal(|| false);
    let mut input_epoch = use_signal(|| 0u32);

    let process = move |_| {
        if busy() {
            return;
        }
        let (lut_file, data_file) = match remote::require_pair(&lut.read(), &data.read()) {
            Ok((l, d)) => (l.clone(), d.clone()),
            Err(err) => {
                tracing::warn!(%err, "submission attempted without both files");
                output.set(Output::Status(StatusMessage::missing_files()));
                return;
            }
        };

        busy.set(true);
        output.set(Output::Status(StatusMessage::processing()));

        spawn(async move {
            let client = ProcessClient::default();
            match client.submit(&lut_file, &data_file).await {
                Ok(result) => {
                    match ResultView::build(&result) {
                        ResultView::Failed(status) => {
                            tracing::error!(message = %status.text, "processing service reported an error");
                            output.set(Output::Status(status));
                        }
                        ResultView::Report(sections) => {
                            output.set(Output::Report(sections));
                            if let Some(series) = result.chart_series() {
                                chart.set(series);
                            }
                        }
                    }
                }
                Err(err) => {
                    tracing::error!(%err, endpoint = client.endpoint(), "processing request failed");
                    output.set(Output::Status(StatusMessage::error(&err)));
                }
            }
            busy.set(false);
        });
    };

    let reset = move |_| {
        lut.set(None);
        data.set(None);
        output.set(Output::Placeholder);
        chart.set(Vec::new());
        input_epoch += 1;
    };

    let pick = move |mut target: Signal<Option<UploadedFile>>| {
        move |evt: FormEvent| async move {
            match upload::first_file(&evt).await {
                Ok(file) => target.set(file),
                Err(err) => {
                    tracing::error!(%err, "file selection failed");
                    target.set(None);
                    output.set(Output::Status(StatusMessage::error(&err)));
                }
            }
        }
    };

    let epoch = input_epoch();

    rsx! {
        div { class: "panel-grid",
            section { class: "results-card bloom-panel",
                div { class: "results-card__header",
                    h2 { {t!("remote-inputs-title")} }
                }

                // Re-keyed on reset so the browser forgets the chosen files.
                for epoch in std::iter::once(epoch) {
                    div { key: "{epoch}", class: "file-fields",
                        label { class: "file-field",
                            span { class: "file-field__label", {t!("remote-lut-label")} }
                            input {
                                r#type: "file",
                                accept: ".xml",
                                onchange: pick(lut),
                            }
                        }
                        label { class: "file-field",
                            span { class: "file-field__label", {t!("remote-data-label")} }
                            input {
                                r#type: "file",
                                accept: ".npz",
                                onchange: pick(data),
                            }
                        }
                    }
                }

                div { class: "panel-actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: busy(),
                        onclick: process,
                        {t!("remote-process")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: reset,
                        {t!("remote-reset")}
                    }
                }
            }

            section { class: "results-card bloom-output",
                match output() {
                    Output::Placeholder => rsx! {
                        div { class: "placeholder",
                            p { {t!("remote-placeholder")} }
                        }
                    },
                    Output::Status(status) => rsx! { StatusBanner { status } },
                    Output::Report(sections) => rsx! {
                        for (idx, section) in sections.into_iter().enumerate() {
                            ReportSection { key: "{idx}", section }
                        }
                    },
                }
            }

            SeriesChart { values: chart(), style: ChartStyle::BLOOM }

            section { class: "results-card map-card",
                MapView { config: config::get().bloom_map.clone() }
            }
        }
    }
}

#[component]
fn StatusBanner(status: StatusMessage) -> Element {
    rsx! {
        div { class: "status-banner", style: status.style(),
            div { class: "status-banner__icon", "{status.kind.icon()}" }
            div { class: "status-banner__text", "{status.text}" }
        }
    }
}

#[component]
fn ReportSection(section: Section) -> Element {
    let Section { title, class, body } = section;

    rsx! {
        div { class: "{class}",
            h3 { "{title}" }
            match body {
                SectionBody::Rows(rows) => rsx! {
                    for row in rows.into_iter() {
                        p { style: row.style(),
                            strong { "{row.label}:" }
                            " {row.value}"
                        }
                    }
                },
                SectionBody::Alerts(alerts) => rsx! {
                    for alert in alerts.into_iter() {
                        div { class: "{alert.class}",
                            strong { "{alert.kind}:" }
                            " {alert.message}"
                        }
                    }
                },
                SectionBody::Message(message) => rsx! {
                    p { "{message}" }
                },
            }
        }
    }
}
