// Value models the fitting stages operate on.
// Pure data plus the O(1)/O(n) helpers that belong to it; the algorithms live in `analysis`.

pub mod timeseries;
pub mod trend_lines;
pub mod weight;

// Re-export key types for convenience
pub use timeseries::TimeSeries;
pub use trend_lines::{LineKind, SampledTrendLines, TrendLines};
pub use weight::LineWeight;
