// Presentation for the command line caller
pub mod report;

pub use report::FitReport;
