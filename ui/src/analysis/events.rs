//! Phenological event detection over a monthly series.

/// Peaks at or below this value are treated as noise.
pub const EVENT_THRESHOLD: f64 = 0.5;

/// Every event is reported with the same nominal length.
pub const EVENT_DURATION_DAYS: u32 = 30;

/// A local maximum in the series. Month labels are one-based and centred on the peak.
#[derive(Debug, Clone, PartialEq)]
pub struct PhenologyEvent {
    pub index: usize,
    pub value: f64,
    pub duration_days: u32,
}

impl PhenologyEvent {
    pub fn name(&self) -> String {
        format!("Evento {}", self.index + 1)
    }

    pub fn start(&self) -> String {
        format!("Mes {}", self.index)
    }

    pub fn peak(&self) -> String {
        format!("Mes {}", self.index + 1)
    }

    pub fn end(&self) -> String {
        format!("Mes {}", self.index + 2)
    }

    pub fn value_label(&self) -> String {
        format!("{:.2}", self.value)
    }
}

/// Flag interior samples strictly above both neighbours and above [`EVENT_THRESHOLD`].
/// The first and last samples are never candidates.
pub fn detect_events(series: &[f64]) -> Vec<PhenologyEvent> {
    series
        .windows(3)
        .enumerate()
        .filter_map(|(offset, window)| {
            let (prev, value, next) = (window[0], window[1], window[2]);
            (value > prev && value > next && value > EVENT_THRESHOLD).then(|| PhenologyEvent {
                index: offset + 1,
                value,
                duration_days: EVENT_DURATION_DAYS,
            })
        })
        .collect()
}
