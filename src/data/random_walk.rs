use rand::Rng;

use crate::models::TimeSeries;

/// A random walk starting at zero, each step uniform in `[-step_amplitude, step_amplitude)`,
/// shifted up so no value is negative.
pub fn random_walk<R: Rng>(rng: &mut R, size: usize, step_amplitude: f64) -> TimeSeries {
    let mut values = Vec::with_capacity(size);
    let mut y = 0.0_f64;
    for x in 0..size {
        if x > 0 && step_amplitude > 0.0 {
            y += rng.gen_range(-step_amplitude..step_amplitude);
        }
        values.push(y);
    }

    let min = values.iter().copied().fold(0.0_f64, f64::min);
    if min < 0.0 {
        values.iter_mut().for_each(|y| *y -= min);
    }
    TimeSeries::from(values)
}
