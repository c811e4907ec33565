//! Local phenology analysis: markup scan, series classification, event detection and
//! the canned Spanish report.

pub mod events;
pub mod kind;
pub mod report;
pub mod series;

mod view;
pub use view::PhenologyPanel;

pub use events::{detect_events, PhenologyEvent};
pub use kind::SeriesKind;
pub use series::{MarkupScan, SeriesSource, MAX_SERIES_LEN};

use rand::Rng;

/// Shown when the user presses the button without choosing a file.
pub const MISSING_FILE_MESSAGE: &str = "Selecciona un archivo XML.";

/// Prefix for failures while reading or interpreting the upload.
pub const PROCESS_ERROR_PREFIX: &str = "Error al procesar XML: ";

/// Everything one press of the process button renders.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalAnalysis {
    pub series: Vec<f64>,
    pub source: SeriesSource,
    pub kind: SeriesKind,
    pub events: Vec<PhenologyEvent>,
    pub report: String,
    pub explanation: String,
}

impl LocalAnalysis {
    pub fn status_message(&self) -> String {
        self.source.status_message()
    }
}

pub fn analyze<R: Rng + ?Sized>(markup: &str, rng: &mut R) -> LocalAnalysis {
    let scan = series::scan_markup(markup);
    if let Some(err) = scan.error.as_ref() {
        tracing::warn!(%err, numbers = scan.numbers.len(), "markup scan stopped early");
    }

    let (series, source) = series::series_from_scan(&scan, rng);
    let kind = SeriesKind::detect(&scan.tags, &series);
    let events = detect_events(&series);
    let report = report::phenology_report(report::DEFAULT_AREA_NAME, &series, kind);
    let explanation = report::explanations(&series, kind);

    tracing::debug!(len = series.len(), ?source, %kind, events = events.len(), "local analysis ready");

    LocalAnalysis {
        series,
        source,
        kind,
        events,
        report,
        explanation,
    }
}
