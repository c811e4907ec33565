//! Turns a [`ProcessResult`] into the sections shown on the bloom page.
//!
//! Everything is plain data so the rendering component stays a thin loop over
//! sections and rows, and the formatting rules can be tested without a DOM.

use super::payload::{
    Alert, BloomAnalysis, ImageMetadata, NdviStats, ProcessResult, Recommendations, TemporalPattern,
};
use super::status::StatusMessage;
use crate::core::format::{format_count, format_number, format_percent, or_na};

pub const DEFAULT_PROJECT: &str = "Monitoreo de Floración";

const DETECTED_COLOR: &str = "#00ff88";
const NOT_DETECTED_COLOR: &str = "#ffaa00";

#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// The service answered with an `error` field; no sections are shown.
    Failed(StatusMessage),
    Report(Vec<Section>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    /// CSS class of the card, `result-section` or `recomendacion`.
    pub class: &'static str,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Rows(Vec<Row>),
    Alerts(Vec<AlertRow>),
    Message(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: &'static str,
    pub value: String,
    pub color: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertRow {
    pub class: String,
    pub kind: String,
    pub message: String,
}

impl Row {
    fn new(label: &'static str, value: String) -> Self {
        Self {
            label,
            value,
            color: None,
        }
    }

    pub fn style(&self) -> Option<String> {
        self.color.map(|color| format!("color: {color};"))
    }
}

impl ResultView {
    pub fn build(result: &ProcessResult) -> Self {
        if let Some(error) = result.error.as_ref() {
            return ResultView::Failed(StatusMessage::error(error));
        }

        let mut sections = vec![header(result)];
        sections.extend(result.image.as_ref().map(image_section));
        sections.extend(result.ndvi.as_ref().map(ndvi_section));
        sections.extend(result.bloom.as_ref().map(bloom_section));
        sections.extend(result.recommendations.as_ref().map(recommendations_section));
        if !result.alerts.is_empty() {
            sections.push(alerts_section(&result.alerts));
        }
        sections.extend(result.temporal.as_ref().map(temporal_section));

        ResultView::Report(sections)
    }
}

fn rows(title: impl Into<String>, rows: Vec<Row>) -> Section {
    Section {
        title: title.into(),
        class: "result-section",
        body: SectionBody::Rows(rows),
    }
}

fn header(result: &ProcessResult) -> Section {
    rows(
        "🌺 FLORABIU - RESULTADOS",
        vec![
            Row::new(
                "Proyecto",
                result
                    .project
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PROJECT.to_string()),
            ),
            Row::new("Fecha de procesamiento", or_na(result.processed_at.clone())),
        ],
    )
}

fn stat(value: Option<f64>, decimals: usize) -> String {
    or_na(value.map(|v| format_number(v, decimals)))
}

fn count(value: Option<u64>) -> String {
    or_na(value.map(format_count))
}

fn image_section(image: &ImageMetadata) -> Section {
    let dimensions = image
        .dimensions
        .as_ref()
        .filter(|dims| !dims.is_empty())
        .map(|dims| {
            dims.iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(" × ")
        });

    rows(
        "📊 Metadatos de Imagen",
        vec![
            Row::new("Dimensiones", or_na(dimensions)),
            Row::new("Tipo LUT", or_na(image.lut_kind.clone())),
            Row::new("Píxeles totales", count(image.total_pixels)),
        ],
    )
}

fn ndvi_section(stats: &NdviStats) -> Section {
    rows(
        "📈 Estadísticas NDVI",
        vec![
            Row::new("Promedio", stat(stats.mean, 3)),
            Row::new("Máximo", stat(stats.max, 3)),
            Row::new("Mínimo", stat(stats.min, 3)),
            Row::new("Desviación estándar", stat(stats.std_dev, 3)),
            Row::new("Píxeles válidos", count(stats.valid_pixels)),
        ],
    )
}

fn bloom_section(bloom: &BloomAnalysis) -> Section {
    let (icon, color) = if bloom.detected {
        ("🌸", DETECTED_COLOR)
    } else {
        ("🌿", NOT_DETECTED_COLOR)
    };

    let state = Row {
        label: "Estado",
        value: or_na(bloom.state.as_ref().map(|s| s.to_uppercase())),
        color: Some(color),
    };

    rows(
        format!("{icon} Análisis de Floración"),
        vec![
            state,
            Row::new("Intensidad", stat(bloom.intensity, 3)),
            Row::new(
                "Área con floración",
                or_na(bloom.area_pixels.map(|px| format!("{} píxeles", format_count(px)))),
            ),
            Row::new(
                "Porcentaje de área",
                or_na(bloom.area_percent.map(|pct| format!("{pct:.1}%"))),
            ),
            Row::new(
                "Confianza de detección",
                or_na(bloom.confidence.map(format_percent)),
            ),
        ],
    )
}

fn recommendations_section(rec: &Recommendations) -> Section {
    Section {
        title: "💡 Recomendaciones".to_string(),
        class: "recomendacion",
        body: SectionBody::Rows(vec![
            Row::new("Mensaje principal", or_na(rec.headline.clone())),
            Row::new("Riego", or_na(rec.irrigation.clone())),
            Row::new("Fertilización", or_na(rec.fertilization.clone())),
            Row::new("Cosecha", or_na(rec.harvest.clone())),
            Row::new("Monitoreo", or_na(rec.monitoring.clone())),
        ]),
    }
}

fn alerts_section(alerts: &[Alert]) -> Section {
    let items = alerts
        .iter()
        .map(|alert| AlertRow {
            class: format!("alert alert-{}", alert.level.as_deref().unwrap_or("info")),
            kind: or_na(alert.kind.clone()),
            message: or_na(alert.message.clone()),
        })
        .collect();

    Section {
        title: "🚨 Alertas".to_string(),
        class: "result-section",
        body: SectionBody::Alerts(items),
    }
}

fn temporal_section(pattern: &TemporalPattern) -> Section {
    const TITLE: &str = "📅 Análisis Temporal";

    if let Some(message) = pattern.message.as_ref() {
        return Section {
            title: TITLE.to_string(),
            class: "result-section",
            body: SectionBody::Message(message.clone()),
        };
    }

    rows(
        TITLE,
        vec![
            Row::new("Tendencia", or_na(pattern.trend.clone())),
            Row::new(
                "Pico de floración estimado",
                or_na(pattern.estimated_peak.clone()),
            ),
            Row::new(
                "Días hasta pico",
                or_na(pattern.days_to_peak.map(|days| format!("{days} días"))),
            ),
            Row::new("Comentario", or_na(pattern.comment.clone())),
        ],
    )
}
