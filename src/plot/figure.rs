use serde::{Deserialize, Serialize};

use super::{REWARD_LABEL, XAxis};

/// One labeled line on a figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// A set of reward curves sharing one pair of axes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl Figure {
    pub fn new(axis: XAxis) -> Self {
        Self {
            x_label: axis.label().to_string(),
            y_label: REWARD_LABEL.to_string(),
            series: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, points: Vec<(f64, f64)>) {
        self.series.push(Series {
            label: label.into(),
            points,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Axis ranges covering every point, as `([x_min, x_max], [y_min, y_max])`
    ///
    /// Degenerate ranges are widened so the chart always has a span to draw.
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let mut x = [f64::INFINITY, f64::NEG_INFINITY];
        let mut y = [f64::INFINITY, f64::NEG_INFINITY];

        for &(px, py) in self.series.iter().flat_map(|s| s.points.iter()) {
            x = [x[0].min(px), x[1].max(px)];
            y = [y[0].min(py), y[1].max(py)];
        }

        (widen(x), widen(y))
    }
}

fn widen(range: [f64; 2]) -> [f64; 2] {
    let [lo, hi] = range;
    if !lo.is_finite() || !hi.is_finite() {
        [0.0, 1.0]
    } else if hi - lo <= f64::EPSILON {
        [lo - 0.5, hi + 0.5]
    } else {
        range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_figure_labels() {
        let figure = Figure::new(XAxis::Steps);
        assert_eq!(figure.x_label, "Training Step");
        assert_eq!(figure.y_label, "Avg. Reward (# Apples Eaten)");
        assert!(figure.is_empty());
    }

    #[test]
    fn test_bounds_over_all_series() {
        let mut figure = Figure::new(XAxis::GamesPlayed);
        figure.push("Run 1", vec![(0.0, 1.0), (50.0, 2.0)]);
        figure.push("Run 2", vec![(0.0, -1.0), (100.0, 0.5)]);

        assert_eq!(figure.len(), 2);
        assert_eq!(figure.bounds(), ([0.0, 100.0], [-1.0, 2.0]));
    }

    #[test]
    fn test_bounds_single_point() {
        let mut figure = Figure::new(XAxis::Steps);
        figure.push("Run 1", vec![(0.0, 3.0)]);
        assert_eq!(figure.bounds(), ([-0.5, 0.5], [2.5, 3.5]));
    }

    #[test]
    fn test_bounds_empty() {
        let figure = Figure::new(XAxis::Steps);
        assert_eq!(figure.bounds(), ([0.0, 1.0], [0.0, 1.0]));
    }
}
