//! Trend line fitting configuration

/// Numeric tolerance for sign tests, bisection termination and bound checks.
/// See <https://en.wikipedia.org/wiki/Machine_epsilon>.
pub const EPSILON: f64 = 1.0e-15;

/// Settings for the smoothing stage
pub struct SmoothingSettings {
    // Factors applied in order when the caller does not supply any (CLI only).
    // Small factors clip only the most extreme deviations from the average line.
    pub default_factors: &'static [f64],
}

/// The Master Fitting Configuration
pub struct FittingConfig {
    // Sub-groups
    pub smoothing: SmoothingSettings,
}

pub const FITTING: FittingConfig = FittingConfig {
    smoothing: SmoothingSettings {
        default_factors: &[0.01, 0.02, 0.05, 0.1, 0.15, 0.25],
    },
};
