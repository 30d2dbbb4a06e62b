use std::cmp::Ordering;

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;
use crate::config::EPSILON;
use crate::domain::Line;
use crate::models::{LineWeight, TimeSeries};

use super::pivot_search::next_pivot;

/// Fits the resistance line: the upper envelope of `series` whose weight is
/// balanced around its pivot.
///
/// Starts horizontal through the global maximum, then keeps rotating onto the
/// next local maximum on the heavier side. When a rotation flips which side is
/// heavier, the balance point lies between the two pivots and is located by
/// bisection.
///
/// # Panics
/// If `series` is empty.
pub fn fit_resistance_line(series: &TimeSeries) -> Line {
    match rotate(series) {
        Rotation::Settled(line) => line,
        Rotation::Overshot {
            line,
            new_line,
            weight_sign,
        } => refine_between(series, &line, &new_line, weight_sign),
    }
}

/// Where the pivot walk stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Rotation {
    /// Balanced, or no further pivot on the heavier side.
    Settled(Line),
    /// Rotating onto `new_line` reversed the weight sign of `line`.
    Overshot {
        line: Line,
        new_line: Line,
        weight_sign: Ordering,
    },
}

fn rotate(series: &TimeSeries) -> Rotation {
    assert!(!series.is_empty(), "cannot fit a line to an empty series");

    let mut line = Line::horizontal(series.global_max());

    loop {
        let weight = LineWeight::of(&line, series);
        let weight_sign = weight.sign();
        let Some(side) = weight.heavier_side() else {
            // Balanced
            return Rotation::Settled(line);
        };

        let Some(new_pivot) = next_pivot(&line, series, side) else {
            return Rotation::Settled(line);
        };
        let new_theta = line.rotate_to(&new_pivot);
        let new_line = Line::new(new_pivot, new_theta);
        let new_weight_sign = LineWeight::of(&new_line, series).sign();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_rotation_steps {
            log::debug!(
                "[resistance] pivot {:?} -> {:?} ({side}), theta {:.6} -> {:.6}, sign {:?} -> {:?}",
                line.pivot,
                new_pivot,
                line.theta,
                new_theta,
                weight_sign,
                new_weight_sign
            );
        }

        if new_weight_sign == weight_sign.reverse() {
            return Rotation::Overshot {
                line,
                new_line,
                weight_sign,
            };
        }

        line = new_line;
    }
}

/// Bisects for the balance point between `line` and the overshooting
/// `new_line`, keeping `line`'s pivot.
///
/// Probes are the lines through the old pivot and a synthetic point `h` above
/// the new pivot. `h` runs from `0` (the new line) up to where the old line
/// crosses the new pivot's time, so every probe stays inside the wedge of the
/// two valid bounds. The last probe evaluated is returned.
///
/// This range is narrower than `old_pivot.value - new_pivot.value` whenever the
/// old line is tilted; on the first rotation from the horizontal the two agree.
fn refine_between(
    series: &TimeSeries,
    line: &Line,
    new_line: &Line,
    weight_sign: Ordering,
) -> Line {
    let new_pivot = new_line.pivot;
    let height = line.value(new_pivot.time) - new_pivot.value;

    let mut solution = line.with_theta(new_line.theta);
    binary_search(height, |h| {
        let probe = new_pivot.with_value(new_pivot.value + h);
        solution = line.with_theta(line.rotate_to(&probe));
        let sign = LineWeight::of(&solution, series).sign();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_binary_search {
            log::debug!(
                "[bisect] h {:.3e} theta {:.12} sign {:?}",
                h,
                solution.theta,
                sign
            );
        }

        // Still heavy on the original side means the angle is too shallow: back towards h = 0
        if sign == Ordering::Equal {
            Ordering::Equal
        } else if sign == weight_sign {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    });

    solution
}

/// Bisection over `[0, length - EPSILON]`.
///
/// `probe` answers `Less` to move the lower bound up, `Greater` to move the upper
/// bound down and `Equal` to stop. Each move is at least [`EPSILON`] and at least
/// one representable step, so the loop ends for any magnitude of `length`.
fn binary_search(length: f64, mut probe: impl FnMut(f64) -> Ordering) {
    let mut low = 0.0_f64;
    let mut high = length - EPSILON;
    while low <= high {
        let mid = (low + high) / 2.0;
        match probe(mid) {
            Ordering::Less => low = (mid + EPSILON).max(mid.next_up()),
            Ordering::Greater => high = (mid - EPSILON).min(mid.next_down()),
            Ordering::Equal => break,
        }
    }
}
