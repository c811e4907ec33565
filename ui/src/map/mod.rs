//! Static slippy-map widget shown beside each analysis page.

pub mod tiles;
pub use tiles::{LatLon, MapConfig};

mod view;
pub use view::MapView;
