use itertools::{Either, Itertools};

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;
use crate::domain::Line;
use crate::models::TimeSeries;
use crate::utils::quantile;

/// Clips extreme peaks and troughs of `series` towards `average`.
///
/// Distances from the average are pooled separately for local maxima at or above
/// the line and local minima below it. Each pool yields its `(1 - factor)`
/// quantile as a threshold; any point (extremum or not) whose distance exceeds
/// the threshold for its side is moved towards the average by the excess. An
/// empty pool clips nothing on its side.
///
/// `factor == 0.0` keeps every deviation; `factor == 1.0` pulls every point
/// down (or up) to the smallest pooled distance.
///
/// # Panics
/// If `series` is empty or `factor` is outside `0.0..=1.0`.
pub fn smooth(series: &TimeSeries, average: &Line, factor: f64) -> TimeSeries {
    assert!(!series.is_empty(), "cannot smooth an empty series");
    assert!(
        (0.0..=1.0).contains(&factor),
        "smoothing factor {factor} outside [0, 1]"
    );
    if factor == 0.0 {
        return series.clone();
    }

    let avg = average.values(series.len());
    let dist: Vec<f64> = (0..series.len())
        .map(|x| (avg[x] - series[x]).abs())
        .collect();

    let (maxima_dist, minima_dist): (Vec<f64>, Vec<f64>) = (0..series.len())
        .filter_map(|x| {
            if series[x] >= avg[x] {
                series.is_local_max(x).then_some(Either::Left(dist[x]))
            } else {
                series.is_local_min(x).then_some(Either::Right(dist[x]))
            }
        })
        .partition_map(|pooled| pooled);

    #[cfg(debug_assertions)]
    let pool_sizes = (maxima_dist.len(), minima_dist.len());

    let tau = 1.0 - factor;
    let maxima_threshold = quantile(maxima_dist, tau);
    let minima_threshold = quantile(minima_dist, tau);

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_smoothing {
        log::debug!(
            "[smooth] factor {:.3}: {} maxima (threshold {:?}), {} minima (threshold {:?})",
            factor,
            pool_sizes.0,
            maxima_threshold,
            pool_sizes.1,
            minima_threshold
        );
    }

    (0..series.len())
        .map(|x| {
            let y = series[x];
            if y >= avg[x] {
                match maxima_threshold {
                    Some(threshold) if dist[x] > threshold => y - (dist[x] - threshold),
                    _ => y,
                }
            } else {
                match minima_threshold {
                    Some(threshold) if dist[x] > threshold => y + (dist[x] - threshold),
                    _ => y,
                }
            }
        })
        .collect()
}
