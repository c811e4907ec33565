//! Static application configuration.
//!
//! Everything here is a compile-time constant except the processing endpoint,
//! which can be overridden when building:
//!
//! ```text
//! PHENOVIEW_ENDPOINT=http://10.0.0.5:8000/process dx build --platform web
//! ```
//!
//! `option_env!` is used rather than runtime environment lookups so the same
//! value reaches the wasm build.

use once_cell::sync::Lazy;

use crate::map::{LatLon, MapConfig};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/process";

pub const OSM_TILE_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";
pub const OSM_MAX_ZOOM: u8 = 19;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Multipart `POST` target for the LUT + data submission.
    pub endpoint: String,
    pub phenology_map: MapConfig,
    pub bloom_map: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let endpoint = option_env!("PHENOVIEW_ENDPOINT")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(DEFAULT_ENDPOINT)
            .to_string();

        Self {
            endpoint,
            // Continental view over Mexico.
            phenology_map: MapConfig {
                center: LatLon::new(20.0, -100.0),
                zoom: 4,
                max_zoom: OSM_MAX_ZOOM,
                tile_template: OSM_TILE_TEMPLATE.to_string(),
                attribution: None,
            },
            // Mexico City.
            bloom_map: MapConfig {
                center: LatLon::new(19.4326, -99.1332),
                zoom: 10,
                max_zoom: OSM_MAX_ZOOM,
                tile_template: OSM_TILE_TEMPLATE.to_string(),
                attribution: Some(OSM_ATTRIBUTION.to_string()),
            },
        }
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::default);

pub fn get() -> &'static AppConfig {
    &CONFIG
}
