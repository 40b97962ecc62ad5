//! Time series fed to an external chart renderer.

use std::collections::VecDeque;

/// Default number of points kept in a series.
pub const MAX_CHART_POINTS: usize = 1000;

/// One chart sample.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// An ordered, bounded sequence of points plus axis labels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartSeries {
    pub x_label: String,
    pub y_label: String,
    points: VecDeque<ChartPoint>,
    #[cfg_attr(feature = "serde", serde(skip, default = "default_max_points"))]
    max_points: usize,
}

#[cfg(feature = "serde")]
fn default_max_points() -> usize {
    MAX_CHART_POINTS
}

impl ChartSeries {
    pub fn new(x_label: impl Into<String>, y_label: impl Into<String>, max_points: usize) -> Self {
        Self {
            x_label: x_label.into(),
            y_label: y_label.into(),
            points: VecDeque::new(),
            max_points: max_points.max(1),
        }
    }

    /// Append a point, dropping the oldest when full.
    pub fn push(&mut self, x: f64, y: f64) {
        if self.points.len() == self.max_points {
            self.points.pop_front();
        }
        self.points.push_back(ChartPoint { x, y });
    }

    pub fn points(&self) -> impl Iterator<Item = &ChartPoint> + '_ {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_bounded() {
        let mut series = ChartSeries::new("tickets", "net", 3);
        for i in 0..5 {
            series.push(i as f64, -(i as f64));
        }
        let xs: Vec<f64> = series.points().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_shape() {
        let mut series = ChartSeries::new("Tickets", "Net ($)", 10);
        series.push(1.0, -2.0);
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["x_label"], "Tickets");
        assert_eq!(json["points"][0]["x"], 1.0);
        assert_eq!(json["points"][0]["y"], -2.0);
        assert!(json.get("max_points").is_none());
    }
}
