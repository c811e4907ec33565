//! Linear scales and SVG path geometry for the series chart.

pub const VIEW_WIDTH: f64 = 600.0;
pub const VIEW_HEIGHT: f64 = 240.0;
pub const MARKER_RADIUS: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

pub const MARGINS: Margins = Margins {
    top: 10.0,
    right: 10.0,
    bottom: 30.0,
    left: 40.0,
};

/// Maps a domain interval onto a range interval. A zero-width domain maps
/// everything to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YDomain {
    /// `[0, max]`, used for normalized series.
    ZeroToMax,
    /// `[min, max]`, used for summary statistics.
    MinToMax,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub stroke: &'static str,
    pub y_domain: YDomain,
    pub markers: bool,
}

impl ChartStyle {
    pub const PHENOLOGY: ChartStyle = ChartStyle {
        stroke: "lime",
        y_domain: YDomain::ZeroToMax,
        markers: false,
    };

    pub const BLOOM: ChartStyle = ChartStyle {
        stroke: "cyan",
        y_domain: YDomain::MinToMax,
        markers: true,
    };
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartGeometry {
    /// SVG path data (`M x,y L x,y ...`), empty when nothing is drawable.
    pub path: String,
    pub points: Vec<(f64, f64)>,
}

impl ChartGeometry {
    /// Non-finite samples are left out of both the line and the markers; the
    /// x position of every other sample still reflects its index.
    pub fn build(values: &[f64], style: ChartStyle) -> Self {
        let finite: Vec<(usize, f64)> = values
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, value)| value.is_finite())
            .collect();
        if finite.is_empty() {
            return Self::default();
        }

        let min = finite.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
        let max = finite
            .iter()
            .map(|(_, v)| *v)
            .fold(f64::NEG_INFINITY, f64::max);

        let x = LinearScale::new(
            (0.0, values.len().saturating_sub(1) as f64),
            (MARGINS.left, VIEW_WIDTH - MARGINS.right),
        );
        let y_domain = match style.y_domain {
            YDomain::ZeroToMax => (0.0, max),
            YDomain::MinToMax => (min, max),
        };
        let y = LinearScale::new(y_domain, (VIEW_HEIGHT - MARGINS.bottom, MARGINS.top));

        let points: Vec<(f64, f64)> = finite
            .iter()
            .map(|(idx, value)| (x.apply(*idx as f64), y.apply(*value)))
            .collect();

        let path = points
            .iter()
            .enumerate()
            .map(|(n, (px, py))| {
                let command = if n == 0 { 'M' } else { 'L' };
                format!("{command}{px:.2},{py:.2}")
            })
            .collect::<Vec<_>>()
            .join("");

        Self { path, points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub fn view_box() -> String {
    format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_maps_endpoints() {
        let scale = LinearScale::new((0.0, 10.0), (40.0, 590.0));
        assert_eq!(scale.apply(0.0), 40.0);
        assert_eq!(scale.apply(10.0), 590.0);
        assert_eq!(scale.apply(5.0), 315.0);
    }

    #[test]
    fn degenerate_domain_maps_to_midpoint() {
        let scale = LinearScale::new((2.0, 2.0), (210.0, 10.0));
        assert_eq!(scale.apply(2.0), 110.0);
        assert_eq!(scale.apply(7.0), 110.0);
    }

    #[test]
    fn phenology_chart_starts_y_at_zero() {
        let geometry = ChartGeometry::build(&[0.0, 0.5, 1.0], ChartStyle::PHENOLOGY);
        assert_eq!(geometry.points.len(), 3);
        assert_eq!(geometry.points[0], (40.0, 210.0));
        assert_eq!(geometry.points[1], (315.0, 110.0));
        assert_eq!(geometry.points[2], (590.0, 10.0));
        assert_eq!(geometry.path, "M40.00,210.00L315.00,110.00L590.00,10.00");
    }

    #[test]
    fn bloom_chart_spans_min_to_max() {
        let geometry = ChartGeometry::build(&[0.2, 0.4, 0.6], ChartStyle::BLOOM);
        assert_eq!(geometry.points[0].1, 210.0);
        assert_eq!(geometry.points[2].1, 10.0);
    }

    #[test]
    fn non_finite_samples_are_skipped() {
        let geometry = ChartGeometry::build(&[0.1, f64::NAN, 0.3], ChartStyle::PHENOLOGY);
        assert_eq!(geometry.points.len(), 2);
        assert_eq!(geometry.points[1].0, 590.0);

        let nothing = ChartGeometry::build(&[f64::NAN, f64::NAN], ChartStyle::PHENOLOGY);
        assert!(nothing.is_empty());
        assert!(nothing.path.is_empty());
    }

    #[test]
    fn single_sample_is_centred_horizontally() {
        let geometry = ChartGeometry::build(&[0.4], ChartStyle::BLOOM);
        assert_eq!(geometry.points, vec![(315.0, 110.0)]);
    }
}
