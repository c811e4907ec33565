//! Loosely-typed response of the processing service.
//!
//! The service has shipped several shapes over time (`metadatos` vs
//! `metadatos_imagen`, `desviacion_std` vs `desviacion`, ...). Every field is
//! optional, each known spelling is accepted, and a field holding the wrong JSON
//! type is treated as missing. Decoding never fails as a whole.

use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessResult {
    pub error: Option<String>,
    pub project: Option<String>,
    pub processed_at: Option<String>,
    pub image: Option<ImageMetadata>,
    pub ndvi: Option<NdviStats>,
    pub bloom: Option<BloomAnalysis>,
    pub recommendations: Option<Recommendations>,
    pub alerts: Vec<Alert>,
    pub temporal: Option<TemporalPattern>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageMetadata {
    pub dimensions: Option<Vec<u64>>,
    pub lut_kind: Option<String>,
    pub total_pixels: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NdviStats {
    pub mean: Option<f64>,
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub std_dev: Option<f64>,
    pub valid_pixels: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BloomAnalysis {
    pub state: Option<String>,
    pub detected: bool,
    pub intensity: Option<f64>,
    pub area_pixels: Option<u64>,
    pub area_percent: Option<f64>,
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recommendations {
    pub headline: Option<String>,
    pub irrigation: Option<String>,
    pub fertilization: Option<String>,
    pub harvest: Option<String>,
    pub monitoring: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alert {
    pub kind: Option<String>,
    pub level: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemporalPattern {
    /// When present the service had nothing structured to say and the other fields are ignored.
    pub message: Option<String>,
    pub trend: Option<String>,
    pub estimated_peak: Option<String>,
    pub days_to_peak: Option<i64>,
    pub comment: Option<String>,
}

impl ProcessResult {
    pub fn from_json(value: &Value) -> Self {
        let Some(root) = value.as_object() else {
            tracing::warn!("processing response is not a JSON object");
            return Self::default();
        };

        Self {
            error: text(root, &["error"]),
            project: text(root, &["proyecto"]),
            processed_at: text(root, &["fecha_procesamiento", "timestamp"]),
            image: object(root, &["metadatos_imagen", "metadatos"]).map(ImageMetadata::from_map),
            ndvi: object(root, &["estadisticas_ndvi"]).map(NdviStats::from_map),
            bloom: object(root, &["analisis_floracion"]).map(BloomAnalysis::from_map),
            recommendations: object(root, &["recomendaciones"]).map(Recommendations::from_map),
            alerts: field(root, &["alertas"])
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_object)
                        .map(Alert::from_map)
                        .collect()
                })
                .unwrap_or_default(),
            temporal: object(root, &["patrones_temporales"]).map(TemporalPattern::from_map),
        }
    }

    /// `None` when the reply carried no NDVI statistics; the chart keeps whatever it showed.
    pub fn chart_series(&self) -> Option<Vec<f64>> {
        self.ndvi.as_ref().map(NdviStats::chart_series)
    }
}

impl ImageMetadata {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            dimensions: field(map, &["dimensiones", "dimensiones_imagen"])
                .and_then(Value::as_array)
                .map(|dims| dims.iter().filter_map(as_count).collect()),
            lut_kind: text(map, &["tipo_lut"]),
            total_pixels: count(map, &["pixeles_totales"]),
        }
    }
}

impl NdviStats {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            mean: number(map, &["promedio"]),
            max: number(map, &["maximo"]),
            min: number(map, &["minimo"]),
            std_dev: number(map, &["desviacion", "desviacion_std"]),
            valid_pixels: count(map, &["pixeles_validos"]),
        }
    }

    /// Five summary points `[min, mean - sd, mean, mean + sd, max]` for the chart.
    /// Missing statistics become `NaN` and are skipped when drawing.
    pub fn chart_series(&self) -> Vec<f64> {
        let mean = self.mean.unwrap_or(f64::NAN);
        let sd = self.std_dev.unwrap_or(f64::NAN);
        vec![
            self.min.unwrap_or(f64::NAN),
            mean - sd,
            mean,
            mean + sd,
            self.max.unwrap_or(f64::NAN),
        ]
    }
}

impl BloomAnalysis {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            state: text(map, &["estado"]),
            detected: field(map, &["floracion_detectada"])
                .and_then(Value::as_bool)
                .unwrap_or(false),
            intensity: number(map, &["intensidad"]),
            area_pixels: count(map, &["area_floracion_pixeles"]),
            area_percent: number(map, &["porcentaje_area"]),
            confidence: number(map, &["confianza_deteccion", "confianza"]),
        }
    }
}

impl Recommendations {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            headline: text(map, &["mensaje_principal"]),
            irrigation: text(map, &["riego"]),
            fertilization: text(map, &["fertilizacion"]),
            harvest: text(map, &["cosecha"]),
            monitoring: text(map, &["monitoreo"]),
        }
    }
}

impl Alert {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            kind: text(map, &["tipo"]),
            level: text(map, &["nivel"]),
            message: text(map, &["mensaje"]),
        }
    }
}

impl TemporalPattern {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            message: text(map, &["mensaje"]),
            trend: text(map, &["tendencia"]),
            estimated_peak: text(map, &["pico_floracion_estimado"]),
            days_to_peak: field(map, &["dias_hasta_pico"]).and_then(|value| {
                value
                    .as_i64()
                    .or_else(|| value.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            }),
            comment: text(map, &["comentario"]),
        }
    }
}

/// First non-null value among `keys`.
fn field<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find(|value| !value.is_null())
}

fn object<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Map<String, Value>> {
    field(map, keys).and_then(Value::as_object)
}

fn number(map: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    field(map, keys).and_then(Value::as_f64)
}

fn count(map: &Map<String, Value>, keys: &[&str]) -> Option<u64> {
    field(map, keys).and_then(as_count)
}

fn as_count(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0)
            .map(|f| f as u64)
    })
}

/// Strings pass through; numbers and booleans are shown as written. Empty strings count as missing.
fn text(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    match field(map, keys)? {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
