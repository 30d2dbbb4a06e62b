//! Configuration module for the trend-lines crate.

pub mod fitting;

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod demo;

// Re-export commonly used items
pub use demo::DEMO;
pub use fitting::{EPSILON, FITTING};
