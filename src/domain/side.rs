use std::ops::Range;

use crate::domain::Point;
use crate::models::TimeSeries;

/// Which side of a pivot to look at.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, strum_macros::EnumIter, strum_macros::Display)]
pub enum Side {
    #[strum(serialize = "left")]
    Left,
    #[strum(serialize = "right")]
    Right,
}

impl Side {
    /// Indices strictly on this side of `pivot`. The pivot itself is never included.
    ///
    /// # Panics
    /// If `pivot.time` is not an index of `series`.
    pub fn range(&self, series: &TimeSeries, pivot: &Point) -> Range<usize> {
        assert!(
            pivot.time < series.len(),
            "pivot time {} outside series of length {}",
            pivot.time,
            series.len()
        );
        match self {
            Side::Left => 0..pivot.time,
            Side::Right => pivot.time + 1..series.len(),
        }
    }
}
