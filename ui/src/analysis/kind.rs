//! Guess what physical quantity a series holds.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Ndvi,
    Reflectance,
    Radiance,
    GenericVegetation,
    Generic,
}

impl SeriesKind {
    pub fn label(&self) -> &'static str {
        match self {
            SeriesKind::Ndvi => "NDVI",
            SeriesKind::Reflectance => "Reflectancia",
            SeriesKind::Radiance => "Radiancia",
            SeriesKind::GenericVegetation => "Vegetación/NDVI genérico",
            SeriesKind::Generic => "Genérico",
        }
    }

    /// Tag names win over values. Without a telling tag, anything above 1 is taken as
    /// radiance and the rest as a generic vegetation index.
    pub fn detect(tags: &[String], series: &[f64]) -> Self {
        if tags.iter().any(|tag| tag.contains("ndvi")) {
            return SeriesKind::Ndvi;
        }
        if tags.iter().any(|tag| tag.contains("reflect")) {
            return SeriesKind::Reflectance;
        }
        if tags.iter().any(|tag| tag.contains("radiance")) {
            return SeriesKind::Radiance;
        }

        let max = nan_aware_max(series);
        if max > 1.0 {
            SeriesKind::Radiance
        } else if max <= 1.0 {
            SeriesKind::GenericVegetation
        } else {
            SeriesKind::Generic
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Any NaN poisons the result; an empty slice gives -inf.
fn nan_aware_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, |acc, value| {
        if acc.is_nan() || value.is_nan() {
            f64::NAN
        } else {
            acc.max(value)
        }
    })
}
