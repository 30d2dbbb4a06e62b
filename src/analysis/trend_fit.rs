use std::borrow::Cow;

use anyhow::{Result, bail, ensure};

use crate::domain::{Line, Point};
use crate::models::{TimeSeries, TrendLines};

use super::resistance::fit_resistance_line;
use super::smoothing::smooth;

/// Fits resistance, support and average lines to `series`.
///
/// Each smoothing factor, in order, clips the series towards the current
/// average line and the lines are refitted on the result. The lines from the
/// last fit are returned, so an empty `smoothing_factors` means a single pass
/// on the raw series.
///
/// Rejects an empty series, non-finite values and factors outside `0.0..=1.0`.
pub fn fit_trend_lines(series: &TimeSeries, smoothing_factors: &[f64]) -> Result<TrendLines> {
    ensure!(!series.is_empty(), "cannot fit trend lines to an empty series");
    if let Some((time, value)) = series
        .values()
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite())
    {
        bail!("series value at time {} is not finite ({})", time, value);
    }
    if let Some(factor) = smoothing_factors
        .iter()
        .find(|f| !(0.0..=1.0).contains(*f))
    {
        bail!("smoothing factor {} is outside [0, 1]", factor);
    }

    let mut current = Cow::Borrowed(series);
    let mut factors = smoothing_factors.iter();
    loop {
        let lines = fit_lines(&current);
        let Some(&factor) = factors.next() else {
            return Ok(lines);
        };
        log::debug!(
            "Smoothing with factor {:.3} against average (theta {:.6})",
            factor,
            lines.average.theta
        );
        current = Cow::Owned(smooth(&current, &lines.average, factor));
    }
}

/// One unsmoothed pass: resistance, mirrored support and their average.
pub fn fit_lines(series: &TimeSeries) -> TrendLines {
    let resistance = fit_resistance_line(series);
    let support = fit_support_line(series);
    let average = average_line(series, &resistance, &support);
    TrendLines {
        resistance,
        support,
        average,
    }
}

/// The lower envelope, found by running the resistance fit on the mirrored series.
pub fn fit_support_line(series: &TimeSeries) -> Line {
    mirror_line(&fit_resistance_line(&series.mirror()), series)
}

/// Maps a line fitted on `series.mirror()` back onto `series`.
///
/// Fitted pivots are always observed points, so the reflected pivot is the
/// original value at the same time; the angle flips sign.
pub fn mirror_line(line: &Line, series: &TimeSeries) -> Line {
    Line::new(series.point(line.pivot.time), -line.theta)
}

/// The line through the resistance/support midpoints at the first and last index.
///
/// # Panics
/// If `series` is empty.
pub fn average_line(series: &TimeSeries, resistance: &Line, support: &Line) -> Line {
    assert!(!series.is_empty(), "cannot average over an empty series");
    let w = series.len() - 1;
    let y_start = (resistance.value(0) + support.value(0)) / 2.0;
    let y_end = (resistance.value(w) + support.value(w)) / 2.0;
    let theta = if w == 0 {
        // Single point: no width to measure a slope over
        0.0
    } else {
        ((y_end - y_start) / w as f64).atan()
    };
    Line::new(Point::new(0, y_start), theta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EPSILON;
    use crate::data::random_walk;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    /// [`EPSILON`] scaled to the magnitudes compared at `t`.
    fn bound_tolerance(line: &Line, series: &TimeSeries, t: usize) -> f64 {
        let peak = series.values().iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        let value = line.value(t);
        EPSILON * (1.0 + peak + value.abs() + (value - line.pivot.value).abs())
    }

    fn assert_envelope(lines: &TrendLines, series: &TimeSeries) {
        for t in 0..series.len() {
            let (resistance, support) = (&lines.resistance, &lines.support);
            assert!(
                resistance.value(t) >= series[t] - bound_tolerance(resistance, series, t),
                "resistance below series at {t}"
            );
            assert!(
                support.value(t) <= series[t] + bound_tolerance(support, series, t),
                "support above series at {t}"
            );
        }
    }

    #[test]
    fn concrete_scenario() {
        let series = TimeSeries::from(vec![1.0, 3.0, 2.0, 5.0, 4.0]);
        let lines = fit_trend_lines(&series, &[]).unwrap();
        assert_envelope(&lines, &series);

        assert_eq!(lines.resistance.pivot, Point::new(3, 5.0));
        assert!(approx_eq(lines.resistance.value(3), 5.0));

        // Support balances on the trough at index 2 with slope 5/6
        assert_eq!(lines.support.pivot, Point::new(2, 2.0));
        assert!(approx_eq(lines.support.slope(), 5.0 / 6.0));

        assert_eq!(lines.average.pivot.time, 0);
        assert!(approx_eq(
            lines.average.value(0),
            (lines.resistance.value(0) + lines.support.value(0)) / 2.0
        ));
        assert!(approx_eq(
            lines.average.value(4),
            (lines.resistance.value(4) + lines.support.value(4)) / 2.0
        ));
    }

    #[test]
    fn constant_series_collapses_all_lines() {
        for len in [1, 2, 9] {
            let series = TimeSeries::from(vec![3.0; len]);
            let lines = fit_trend_lines(&series, &[]).unwrap();
            for line in [lines.resistance, lines.support, lines.average] {
                assert_eq!(line.theta, 0.0);
                assert!((0..len).all(|t| approx_eq(line.value(t), 3.0)));
            }
        }
    }

    #[test]
    fn envelope_holds_on_random_walks() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let series = random_walk(&mut rng, 120, 0.5);
            let lines = fit_trend_lines(&series, &[]).unwrap();
            assert_envelope(&lines, &series);
        }
    }

    #[test]
    fn empty_factors_is_a_single_pass() {
        let series = TimeSeries::from(vec![2.0, 4.5, 1.0, 3.5, 0.5, 5.0, 2.5]);
        assert_eq!(fit_trend_lines(&series, &[]).unwrap(), fit_lines(&series));
    }

    #[test]
    fn factors_are_applied_in_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let series = random_walk(&mut rng, 60, 0.5);

        let first = fit_lines(&series);
        let once = smooth(&series, &first.average, 0.1);
        let second = fit_lines(&once);
        let twice = smooth(&once, &second.average, 0.3);

        let lines = fit_trend_lines(&series, &[0.1, 0.3]).unwrap();
        assert_eq!(lines, fit_lines(&twice));
    }

    #[test]
    fn zero_factors_do_not_change_the_result() {
        let series = TimeSeries::from(vec![2.0, 4.5, 1.0, 3.5, 0.5, 5.0, 2.5]);
        assert_eq!(
            fit_trend_lines(&series, &[0.0, 0.0]).unwrap(),
            fit_trend_lines(&series, &[]).unwrap()
        );
    }

    #[test]
    fn mirror_line_reflects_back_onto_the_series() {
        let series = TimeSeries::from(vec![1.0, 3.0, 2.0, 5.0, 4.0]);
        let mirrored = series.mirror();
        let fitted = Line::new(mirrored.point(2), -0.25);
        let back = mirror_line(&fitted, &series);
        assert_eq!(back.pivot, Point::new(2, 2.0));
        assert_eq!(back.theta, 0.25);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(fit_trend_lines(&TimeSeries::default(), &[]).is_err());
        let series = TimeSeries::from(vec![1.0, 2.0]);
        assert!(fit_trend_lines(&series, &[0.5, 1.2]).is_err());
        assert!(fit_trend_lines(&series, &[-0.1]).is_err());
        let with_nan = TimeSeries::from(vec![1.0, f64::NAN]);
        assert!(fit_trend_lines(&with_nan, &[]).is_err());
    }

    #[test]
    fn average_of_a_single_point_is_flat() {
        let series = TimeSeries::from(vec![4.0]);
        let r = Line::horizontal(Point::new(0, 4.0));
        let avg = average_line(&series, &r, &r);
        assert_eq!(avg, Line::horizontal(Point::new(0, 4.0)));
    }
}
