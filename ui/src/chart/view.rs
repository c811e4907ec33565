use dioxus::prelude::*;

use super::geometry::{view_box, ChartGeometry, ChartStyle, MARKER_RADIUS};

/// Renders `values` as an inline SVG line. An empty slice renders the placeholder.
#[component]
pub fn SeriesChart(values: Vec<f64>, style: ChartStyle) -> Element {
    let geometry = ChartGeometry::build(&values, style);
    let stroke = style.stroke;
    let markers = if style.markers {
        geometry.points.clone()
    } else {
        Vec::new()
    };

    rsx! {
        section { class: "results-card series-chart",
            div { class: "results-card__header",
                h2 { {crate::t!("chart-title")} }
                if !values.is_empty() {
                    span { class: "results-card__meta", {crate::t!("chart-samples", count = values.len())} }
                }
            }

            if geometry.is_empty() {
                p { class: "results-card__placeholder", {crate::t!("chart-empty")} }
            } else {
                svg {
                    class: "series-chart__svg",
                    view_box: view_box(),
                    preserve_aspect_ratio: "xMidYMid meet",
                    path {
                        d: "{geometry.path}",
                        fill: "none",
                        stroke: "{stroke}",
                        stroke_width: "2",
                        opacity: "0.9",
                    }
                    for (cx, cy) in markers.into_iter() {
                        circle {
                            cx: "{cx}",
                            cy: "{cy}",
                            r: "{MARKER_RADIUS}",
                            fill: "{stroke}",
                        }
                    }
                }
            }
        }
    }
}
