//! config/demo.rs Random-walk demo configuration knobs.
//!
//! These only affect the binaries; the fitting library never reads them.

/// Shape of the generated random walk
pub struct RandomWalkSettings {
    /// Number of points in the generated series
    pub size: usize,
    /// Each step is drawn uniformly from `[-step_amplitude, step_amplitude)`
    pub step_amplitude: f64,
}

/// The Master Demo Configuration
pub struct DemoConfig {
    pub random_walk: RandomWalkSettings,
    /// Where `make_random_series` writes when no `--output` is given
    pub default_output_path: &'static str,
}

pub const DEMO: DemoConfig = DemoConfig {
    random_walk: RandomWalkSettings {
        size: 120,
        step_amplitude: 0.5,
    },
    default_output_path: "series_data/random_series.json",
};
