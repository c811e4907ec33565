//! Plain-text phenology report and per-month interpretation.

use std::fmt::Write;

use super::events::detect_events;
use super::kind::SeriesKind;

pub const DEFAULT_AREA_NAME: &str = "Área Genérica";

const ANALYSED_PERIOD: &str = "Período analizado: Enero 2020 - Diciembre 2023";
const NO_EVENTS: &str = "No se detectaron eventos fenológicos significativos.";

/// Upper-exclusive bucket bounds; a value at or above every bound gets the table's `top` sentence.
struct BucketTable {
    bounds: &'static [(f64, &'static str)],
    top: &'static str,
}

impl BucketTable {
    fn describe(&self, value: f64) -> &'static str {
        self.bounds
            .iter()
            .find(|(limit, _)| value < *limit)
            .map(|(_, sentence)| *sentence)
            .unwrap_or(self.top)
    }
}

const NDVI_TABLE: BucketTable = BucketTable {
    bounds: &[
        (0.0, "Área sin vegetación (agua, suelo desnudo)"),
        (0.2, "Vegetación muy baja"),
        (0.5, "Vegetación moderada, crecimiento parcial"),
        (0.7, "Vegetación activa, fotosíntesis intensa"),
    ],
    top: "Pico de vegetación, máximo crecimiento o frondosidad",
};

const REFLECTANCE_TABLE: BucketTable = BucketTable {
    bounds: &[
        (0.1, "Baja reflectancia, suelo oscuro o sombra"),
        (0.4, "Reflectancia moderada, vegetación dispersa"),
        (0.7, "Reflectancia alta, vegetación densa o iluminación fuerte"),
    ],
    top: "Reflectancia máxima, área muy brillante o saturación del sensor",
};

const RADIANCE_TABLE: BucketTable = BucketTable {
    bounds: &[
        (0.3, "Radiancia baja, poca emisión detectada"),
        (0.6, "Radiancia moderada"),
    ],
    top: "Radiancia alta, zona muy brillante o alta energía",
};

const GENERIC_TABLE: BucketTable = BucketTable {
    bounds: &[(0.3, "Valor bajo"), (0.6, "Valor moderado")],
    top: "Valor alto",
};

fn table_for(kind: SeriesKind) -> &'static BucketTable {
    match kind {
        SeriesKind::Ndvi => &NDVI_TABLE,
        SeriesKind::Reflectance => &REFLECTANCE_TABLE,
        SeriesKind::Radiance => &RADIANCE_TABLE,
        SeriesKind::GenericVegetation | SeriesKind::Generic => &GENERIC_TABLE,
    }
}

/// Canned sentence for a single sample.
pub fn describe_value(kind: SeriesKind, value: f64) -> &'static str {
    table_for(kind).describe(value)
}

pub fn phenology_report(area: &str, series: &[f64], kind: SeriesKind) -> String {
    let events = detect_events(series);

    let mut report = format!("ANÁLISIS FENOLÓGICO - {area} ({kind})\n");
    report.push_str("=========================================\n");
    report.push_str(ANALYSED_PERIOD);
    report.push_str("\n\nEventos detectados:\n");

    for (position, event) in events.iter().enumerate() {
        let _ = writeln!(report, "{}. {}", position + 1, event.name());
        let _ = writeln!(report, "- Inicio: {}", event.start());
        let _ = writeln!(
            report,
            "- Pico máximo: {} (Valor: {})",
            event.peak(),
            event.value_label()
        );
        let _ = writeln!(report, "- Fin: {}", event.end());
        let _ = writeln!(report, "- Duración: {} días\n", event.duration_days);
    }

    if events.is_empty() {
        report.push_str(NO_EVENTS);
        report.push('\n');
    }

    report
}

pub fn explanations(series: &[f64], kind: SeriesKind) -> String {
    let mut text = format!("INTERPRETACIÓN DETALLADA ({kind})\n");
    text.push_str("===============================\n");

    for (index, value) in series.iter().enumerate() {
        let _ = writeln!(
            text,
            "Mes {}: Valor {:.2} → {}",
            index + 1,
            value,
            describe_value(kind, *value)
        );
    }

    text
}
