use serde::{Deserialize, Serialize};

/// Coordinates of a point in a time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Position along the x-axis (index into the series)
    pub time: usize,
    /// Position along the y-axis
    pub value: f64,
}

impl Point {
    pub fn new(time: usize, value: f64) -> Self {
        Point { time, value }
    }

    /// Same time, different value. Used to build the synthetic points of the bisection.
    pub fn with_value(&self, value: f64) -> Self {
        Point {
            time: self.time,
            value,
        }
    }
}
