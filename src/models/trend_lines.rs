use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::Line;

/// The three lines fitted to a series.
///
/// - `resistance` bounds the series from above, touching local maxima.
/// - `support` bounds the series from below, touching local minima.
/// - `average` runs through the midpoints of the two at both ends of the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLines {
    pub resistance: Line,
    pub support: Line,
    pub average: Line,
}

#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum LineKind {
    Resistance,
    Support,
    Average,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LineKind::Resistance => write!(f, "resistance"),
            LineKind::Support => write!(f, "support"),
            LineKind::Average => write!(f, "average"),
        }
    }
}

/// The three lines sampled at every index of a series, ready for plotting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampledTrendLines {
    pub resistance: Vec<f64>,
    pub support: Vec<f64>,
    pub average: Vec<f64>,
}

impl TrendLines {
    pub fn line(&self, kind: LineKind) -> &Line {
        match kind {
            LineKind::Resistance => &self.resistance,
            LineKind::Support => &self.support,
            LineKind::Average => &self.average,
        }
    }

    /// Samples all three lines at `0..len`.
    pub fn evaluate(&self, len: usize) -> SampledTrendLines {
        SampledTrendLines {
            resistance: self.resistance.values(len),
            support: self.support.values(len),
            average: self.average.values(len),
        }
    }
}
