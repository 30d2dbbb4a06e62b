use argminmax::ArgMinMax;
use statrs::statistics::{Data, OrderStatistics};

/// Index of the largest value. Ties resolve to the first occurrence.
///
/// # Panics
/// If `vec` is empty.
pub fn max_index(vec: &[f64]) -> usize {
    assert!(!vec.is_empty(), "max of an empty series");
    vec.argmax()
}

pub fn get_max(vec: &[f64]) -> f64 {
    vec[max_index(vec)]
}

/// The `tau` quantile (`0.0..=1.0`) of `values`, or `None` for an empty pool.
///
/// Uses the `tau * (n + 1)` rank estimator: interpolates between the two
/// neighbouring order statistics and clamps to the minimum below rank 1 and to
/// the maximum at or above rank `n`. `tau == 1.0` is therefore the maximum and
/// `tau == 0.0` the minimum.
pub fn quantile(values: Vec<f64>, tau: f64) -> Option<f64> {
    debug_assert!((0.0..=1.0).contains(&tau), "quantile {tau} out of range");
    if values.is_empty() {
        return None;
    }
    let n = values.len();
    let mut data = Data::new(values);

    let pos = tau * (n as f64 + 1.0);
    let q = if pos < 1.0 {
        data.order_statistic(1)
    } else if pos >= n as f64 {
        data.order_statistic(n)
    } else {
        let rank = pos.floor();
        let lower = data.order_statistic(rank as usize);
        let upper = data.order_statistic(rank as usize + 1);
        lower + (pos - rank) * (upper - lower)
    };
    // statrs signals bad input with NaN rather than a Result
    (!q.is_nan()).then_some(q)
}
