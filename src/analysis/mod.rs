// Trend line fitting: pivot search, the rotating-envelope solver and smoothing
pub mod pivot_search;
pub mod resistance;
pub mod smoothing;
pub mod trend_fit;

// Re-export commonly used functions
pub use resistance::fit_resistance_line;
pub use smoothing::smooth;
pub use trend_fit::{average_line, fit_lines, fit_support_line, fit_trend_lines, mirror_line};
