// Series sources for the binaries: generated random walks and JSON files
pub mod random_walk;
pub mod series_file;

// Re-export commonly used items
pub use random_walk::random_walk;
pub use series_file::SeriesFile;
