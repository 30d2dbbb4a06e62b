use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use crate::domain::Point;

/// A straight line in a time series, stored as the point it rotates around and its angle.
///
/// ```text
///    y-axis (value)
///          |
///          |        line
///          |      /
///          |    /
///    pivot |  /  θ
///    ______|/_____________ x-axis (time)
///         /|
///       /  |
/// ```
///
/// `theta` is in radians and always lies strictly inside `(-π/2, π/2)`, so the
/// line is never vertical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub pivot: Point,
    pub theta: f64,
}

impl Line {
    pub fn new(pivot: Point, theta: f64) -> Self {
        debug_assert!(
            theta.abs() < FRAC_PI_2,
            "line angle {theta} is vertical or beyond"
        );
        Line { pivot, theta }
    }

    /// Horizontal line through `pivot`.
    pub fn horizontal(pivot: Point) -> Self {
        Line::new(pivot, 0.0)
    }

    /// Same pivot, new angle.
    pub fn with_theta(&self, theta: f64) -> Self {
        Line::new(self.pivot, theta)
    }

    /// The y value of this line at `time`.
    #[inline]
    pub fn value(&self, time: usize) -> f64 {
        let w = time as f64 - self.pivot.time as f64;
        self.pivot.value + self.theta.tan() * w
    }

    pub fn slope(&self) -> f64 {
        self.theta.tan()
    }

    /// The angle this line would have after rotating around its pivot until it
    /// passes through `point`.
    ///
    /// # Panics
    /// If `point` shares the pivot's time index: there is no rotation of zero width.
    pub fn rotate_to(&self, point: &Point) -> f64 {
        assert_ne!(
            self.pivot.time, point.time,
            "cannot rotate a line to a point at its own pivot time"
        );
        let w = self.pivot.time as f64 - point.time as f64;
        let h = self.pivot.value - point.value;
        (h / w).atan()
    }

    /// Samples this line at `0..len`.
    pub fn values(&self, len: usize) -> Vec<f64> {
        (0..len).map(|t| self.value(t)).collect()
    }
}
