use dioxus::prelude::*;

use super::tiles::{self, MapConfig, TILE_SIZE};

/// Tiles drawn on each side of the centre tile.
const GRID_RADIUS: i64 = 1;

#[derive(Debug, Clone, PartialEq)]
struct PlacedTile {
    key: String,
    url: String,
    left: f64,
    top: f64,
}

impl PlacedTile {
    fn style(&self) -> String {
        format!("left: {:.1}px; top: {:.1}px;", self.left, self.top)
    }
}

/// Lay out a square of tiles around the centre tile. Offsets are relative to the
/// map centre, so the container only needs to translate by half its size.
fn placed_tiles(config: &MapConfig, zoom: u8) -> Vec<PlacedTile> {
    let (fx, fy) = tiles::project(config.center, zoom);
    let (cx, cy) = (fx.floor() as i64, fy.floor() as i64);
    let (offset_x, offset_y) = ((fx - cx as f64) * TILE_SIZE, (fy - cy as f64) * TILE_SIZE);

    let mut placed = Vec::new();
    for dy in -GRID_RADIUS..=GRID_RADIUS {
        for dx in -GRID_RADIUS..=GRID_RADIUS {
            let Some(coord) = tiles::normalize_tile(cx + dx, cy + dy, zoom) else {
                continue;
            };
            placed.push(PlacedTile {
                key: format!("{}-{}-{}-{dx}-{dy}", coord.z, coord.x, coord.y),
                url: tiles::tile_url(&config.tile_template, coord),
                left: dx as f64 * TILE_SIZE - offset_x,
                top: dy as f64 * TILE_SIZE - offset_y,
            });
        }
    }
    placed
}

#[component]
pub fn MapView(config: MapConfig) -> Element {
    let mut zoom = use_signal(|| config.zoom.min(config.max_zoom));
    let current = zoom();
    let max_zoom = config.max_zoom;
    let tiles = placed_tiles(&config, current);

    rsx! {
        div { class: "map",
            div { class: "map__viewport",
                div { class: "map__tiles",
                    for tile in tiles.into_iter() {
                        img {
                            key: "{tile.key}",
                            class: "map__tile",
                            src: "{tile.url}",
                            alt: "",
                            draggable: "false",
                            style: tile.style(),
                        }
                    }
                }
                span { class: "map__marker", aria_hidden: "true" }
            }

            div { class: "map__controls",
                button {
                    r#type: "button",
                    class: "button button--ghost map__zoom",
                    aria_label: crate::t!("map-zoom-in"),
                    disabled: current >= max_zoom,
                    onclick: move |_| zoom.set((current + 1).min(max_zoom)),
                    "+"
                }
                button {
                    r#type: "button",
                    class: "button button--ghost map__zoom",
                    aria_label: crate::t!("map-zoom-out"),
                    disabled: current == 0,
                    onclick: move |_| zoom.set(current.saturating_sub(1)),
                    "−"
                }
                span { class: "map__zoom-level", "z{current}" }
            }

            if let Some(attribution) = config.attribution.as_ref() {
                span { class: "map__attribution", "{attribution}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::tiles::LatLon;

    fn world() -> MapConfig {
        MapConfig {
            center: LatLon::new(20.0, -100.0),
            zoom: 4,
            max_zoom: 19,
            tile_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            attribution: None,
        }
    }

    #[test]
    fn full_grid_away_from_poles() {
        let tiles = placed_tiles(&world(), 4);
        assert_eq!(tiles.len(), 9);
        assert!(tiles.iter().any(|t| t.url.ends_with("/4/3/7.png")));
    }

    #[test]
    fn centre_tile_offset_places_centre_at_origin() {
        let placed = placed_tiles(&world(), 4);
        let centre = placed
            .iter()
            .find(|t| t.url.ends_with("/4/3/7.png"))
            .expect("centre tile present");
        let (fx, fy) = tiles::project(world().center, 4);
        assert!((centre.left + (fx - 3.0) * TILE_SIZE).abs() < 1e-9);
        assert!((centre.top + (fy - 7.0) * TILE_SIZE).abs() < 1e-9);
    }

    #[test]
    fn zoom_zero_has_single_row() {
        let tiles = placed_tiles(&world(), 0);
        assert_eq!(tiles.len(), 3);
    }
}
