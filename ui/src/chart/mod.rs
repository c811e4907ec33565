//! Line chart over a short numeric series.

pub mod geometry;
pub use geometry::{ChartGeometry, ChartStyle, LinearScale, YDomain};

mod view;
pub use view::SeriesChart;
