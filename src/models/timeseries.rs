use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::domain::Point;
use crate::utils::{get_max, max_index};

// ============================================================================
// TimeSeries: ordered values, the index is the time axis
// ============================================================================

/// A time series is an ordered list of values; a JSON array of numbers
/// deserializes straight into one.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct TimeSeries {
    values: Vec<f64>,
}

impl From<Vec<f64>> for TimeSeries {
    fn from(values: Vec<f64>) -> Self {
        TimeSeries { values }
    }
}

impl FromIterator<f64> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        TimeSeries {
            values: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for TimeSeries {
    type Output = f64;

    fn index(&self, time: usize) -> &f64 {
        &self.values[time]
    }
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, time: usize) -> Option<f64> {
        self.values.get(time).copied()
    }

    pub fn point(&self, time: usize) -> Point {
        Point::new(time, self.values[time])
    }

    /// The first point holding the largest value.
    ///
    /// # Panics
    /// If the series is empty.
    pub fn global_max(&self) -> Point {
        self.point(max_index(&self.values))
    }

    /// Tests whether the value at `time` is a local maximum: the slope into the
    /// point is steeper than the slope out of it. A missing neighbour counts as
    /// negative infinity, so boundary points lean towards being maxima.
    ///
    /// ```text
    ///           max
    ///           /\
    ///         /   \     max
    ///     __/      \_____
    ///                    \__ time-series
    /// ```
    pub fn is_local_max(&self, time: usize) -> bool {
        let current = self.values[time];
        let prev = self.neighbour_before(time).unwrap_or(f64::NEG_INFINITY);
        let next = self.get(time + 1).unwrap_or(f64::NEG_INFINITY);
        current - prev > next - current
    }

    /// Mirror image of [`TimeSeries::is_local_max`]; missing neighbours count as positive infinity.
    pub fn is_local_min(&self, time: usize) -> bool {
        let current = self.values[time];
        let prev = self.neighbour_before(time).unwrap_or(f64::INFINITY);
        let next = self.get(time + 1).unwrap_or(f64::INFINITY);
        current - prev < next - current
    }

    fn neighbour_before(&self, time: usize) -> Option<f64> {
        time.checked_sub(1).and_then(|t| self.get(t))
    }

    /// Reflects every value about the horizontal line through the global maximum.
    ///
    /// ```text
    ///                          __
    ///       __          _____/
    ///         \       /
    ///          \    /
    ///           \ /
    ///      --max-*------------ horizontal line
    ///           /\
    ///         /   \
    ///     __/      \_____
    ///                    \__ time-series
    /// ```
    ///
    /// Lows become highs, so an upper-envelope solver run on the mirror finds the
    /// lower envelope of the original.
    pub fn mirror(&self) -> TimeSeries {
        let max = get_max(&self.values);
        self.values.iter().map(|&y| max + (max - y)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn single_point_is_both_local_max_and_min() {
        let series = TimeSeries::from(vec![42.0]);
        assert!(series.is_local_max(0));
        assert!(series.is_local_min(0));
    }

    #[test]
    fn peaks_and_troughs() {
        let series = TimeSeries::from(vec![1.0, 3.0, 2.0, 5.0, 4.0]);
        let maxima: Vec<usize> = (0..series.len()).filter(|&t| series.is_local_max(t)).collect();
        let minima: Vec<usize> = (0..series.len()).filter(|&t| series.is_local_min(t)).collect();
        assert_eq!(maxima, vec![0, 1, 3, 4]);
        assert_eq!(minima, vec![0, 2, 4]);
    }

    #[test]
    fn flat_interior_point_is_neither() {
        let series = TimeSeries::from(vec![1.0, 1.0, 1.0]);
        assert!(!series.is_local_max(1));
        assert!(!series.is_local_min(1));
    }

    #[test]
    fn global_max_takes_first_occurrence() {
        let series = TimeSeries::from(vec![1.0, 5.0, 2.0, 5.0]);
        assert_eq!(series.global_max(), Point::new(1, 5.0));
    }

    #[test]
    fn mirror_reflects_about_the_max() {
        let series = TimeSeries::from(vec![1.0, 3.0, 2.0, 5.0, 4.0]);
        let mirrored = series.mirror();
        assert_eq!(mirrored.values(), &[9.0, 7.0, 8.0, 5.0, 6.0]);
    }

    #[test]
    fn mirror_is_an_involution() {
        let series = TimeSeries::from(vec![0.3, -1.7, 2.25, 0.0, 1e-3, 7.5, -4.125]);
        let twice = series.mirror().mirror();
        for t in 0..series.len() {
            assert!(approx_eq(twice[t], series[t]), "index {t}");
        }
    }

    #[test]
    fn deserializes_from_a_plain_json_array() {
        let series: TimeSeries = serde_json::from_str("[1.5, 2.0, -3]").unwrap();
        assert_eq!(series.values(), &[1.5, 2.0, -3.0]);
        assert_eq!(serde_json::to_string(&series).unwrap(), "[1.5,2.0,-3.0]");
    }
}
