//! Slippy-map tile maths and URL templating.

use std::f64::consts::PI;

/// Edge length of a standard raster tile in CSS pixels.
pub const TILE_SIZE: f64 = 256.0;

const SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Static description of a map widget.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub center: LatLon,
    pub zoom: u8,
    pub max_zoom: u8,
    pub tile_template: String,
    pub attribution: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCoord {
    pub x: i64,
    pub y: i64,
    pub z: u8,
}

/// Fractional tile position of a coordinate at `zoom` (Web Mercator).
pub fn project(center: LatLon, zoom: u8) -> (f64, f64) {
    let n = (1_u64 << zoom.min(30)) as f64;
    let x = (center.lon + 180.0) / 360.0 * n;
    let lat_rad = center.lat.to_radians();
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * n;
    (x, y)
}

/// Wrap x around the antimeridian; `None` when y falls off the top or bottom of the world.
pub fn normalize_tile(x: i64, y: i64, z: u8) -> Option<TileCoord> {
    let n = 1_i64 << z.min(30);
    if !(0..n).contains(&y) {
        return None;
    }
    Some(TileCoord {
        x: x.rem_euclid(n),
        y,
        z,
    })
}

pub fn subdomain(coord: TileCoord) -> &'static str {
    let idx = (coord.x + coord.y).unsigned_abs() as usize % SUBDOMAINS.len();
    SUBDOMAINS[idx]
}

/// Fill `{s}`, `{z}`, `{x}` and `{y}` in a tile URL template.
pub fn tile_url(template: &str, coord: TileCoord) -> String {
    template
        .replace("{s}", subdomain(coord))
        .replace("{z}", &coord.z.to_string())
        .replace("{x}", &coord.x.to_string())
        .replace("{y}", &coord.y.to_string())
}
