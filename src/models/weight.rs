use std::cmp::Ordering;

use crate::config::EPSILON;
use crate::domain::{Line, Side};
use crate::models::TimeSeries;

/// Weight of a line, split at its pivot: the signed area between the line and
/// the series on each side.
///
/// ```text
///         pivot (max)
///     _________*______________________ line
///     ......../\......................
///     ....../   \..............max....
///     ..../      \............./\.....
///     __/         \__......../   \____ time-series
///                    \_____/
///
///     weight = dotted area
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineWeight {
    /// Sum over `0..pivot`
    pub left: f64,
    /// Sum over `pivot + 1..len`
    pub right: f64,
}

impl LineWeight {
    pub fn of(line: &Line, series: &TimeSeries) -> Self {
        let height = |x: usize| line.value(x) - series[x];
        let left = Side::Left.range(series, &line.pivot).map(height).sum();
        let right = Side::Right.range(series, &line.pivot).map(height).sum();
        LineWeight { left, right }
    }

    /// Which side carries more weight:
    ///   - `Greater` when the left side is heavier (pivot further left),
    ///   - `Equal` when balanced within [`EPSILON`],
    ///   - `Less` when the right side is heavier.
    pub fn sign(&self) -> Ordering {
        let d = self.left - self.right;
        if d.abs() <= EPSILON {
            Ordering::Equal
        } else if d > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }

    /// The side a heavier weight pulls the pivot towards, `None` when balanced.
    pub fn heavier_side(&self) -> Option<Side> {
        match self.sign() {
            Ordering::Greater => Some(Side::Left),
            Ordering::Less => Some(Side::Right),
            Ordering::Equal => None,
        }
    }
}
