// Geometry value objects
pub mod line;
pub mod point;
pub mod side;

// Re-export commonly used types
pub use line::Line;
pub use point::Point;
pub use side::Side;
