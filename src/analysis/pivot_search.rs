use crate::config::EPSILON;
use crate::domain::{Line, Point, Side};
use crate::models::TimeSeries;

/// True when no value of `series` lies more than [`EPSILON`] above `line`.
pub fn bounds_from_above(line: &Line, series: &TimeSeries) -> bool {
    (0..series.len()).all(|x| line.value(x) >= series[x] - EPSILON)
}

/// Finds the local maximum on `side` of the pivot that the line can rotate onto
/// while still bounding the whole series from above.
///
/// Every surviving candidate is a valid upper envelope; the one with the largest
/// angle wins. Candidates are scanned in ascending time order and a later one
/// only replaces the current best when its angle is strictly larger, so ties go
/// to the earliest index.
pub fn next_pivot(line: &Line, series: &TimeSeries, side: Side) -> Option<Point> {
    side.range(series, &line.pivot)
        .filter(|&time| series.is_local_max(time))
        .map(|time| {
            let p = series.point(time);
            Line::new(p, line.rotate_to(&p))
        })
        .filter(|candidate| bounds_from_above(candidate, series))
        .fold(None, |best: Option<Line>, candidate| match best {
            Some(best) if best.theta >= candidate.theta => Some(best),
            _ => Some(candidate),
        })
        .map(|winner| winner.pivot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_only_valid_candidate_on_the_left() {
        let series = TimeSeries::from(vec![1.0, 3.0, 2.0, 5.0, 4.0]);
        let line = Line::horizontal(series.global_max());
        // Rotating onto index 0 would cut through index 1
        assert_eq!(next_pivot(&line, &series, Side::Left), Some(Point::new(1, 3.0)));
    }

    #[test]
    fn picks_the_only_valid_candidate_on_the_right() {
        let series = TimeSeries::from(vec![1.0, 3.0, 2.0, 5.0, 4.0]);
        let line = Line::horizontal(series.global_max());
        assert_eq!(next_pivot(&line, &series, Side::Right), Some(Point::new(4, 4.0)));
    }

    #[test]
    fn nothing_to_find_beyond_the_edge() {
        let series = TimeSeries::from(vec![5.0, 1.0, 2.0]);
        let line = Line::horizontal(series.global_max());
        assert_eq!(next_pivot(&line, &series, Side::Left), None);
    }

    #[test]
    fn collinear_candidates_resolve_to_the_earliest_index() {
        // Indices 1 and 3 both sit on the line y = t + 1 through the pivot at 5,
        // so rotating onto either gives the same angle.
        let series = TimeSeries::from(vec![0.0, 2.0, 0.0, 4.0, 0.0, 6.0]);
        let line = Line::horizontal(series.global_max());
        assert_eq!(next_pivot(&line, &series, Side::Left), Some(Point::new(1, 2.0)));
    }

    #[test]
    fn bound_check_tolerates_touching_points() {
        let series = TimeSeries::from(vec![2.0, 3.0, 4.0]);
        let line = Line::new(Point::new(0, 2.0), std::f64::consts::FRAC_PI_4);
        assert!(bounds_from_above(&line, &series));
        let lower = Line::horizontal(Point::new(0, 3.5));
        assert!(!bounds_from_above(&lower, &series));
    }
}
