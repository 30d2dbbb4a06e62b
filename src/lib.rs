#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use analysis::fit_trend_lines;
pub use domain::{Line, Point, Side};
pub use models::{LineWeight, TimeSeries, TrendLines};

use std::path::PathBuf;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{DEMO, FITTING};
use crate::data::{SeriesFile, random_walk};
use crate::ui::FitReport;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read the series from a JSON array of numbers instead of generating a random walk
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Length of the generated random walk
    #[arg(long, default_value_t = DEMO.random_walk.size)]
    pub size: usize,

    /// Seed for the random walk (fresh entropy when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Comma-separated smoothing factors in [0, 1], applied in order
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = FITTING.smoothing.default_factors.to_vec()
    )]
    pub smoothing: Vec<f64>,

    /// Fit the raw series only, ignoring --smoothing
    #[arg(long, default_value_t = false)]
    pub no_smoothing: bool,

    /// Print JSON instead of a text table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Cli {
    pub fn smoothing_factors(&self) -> &[f64] {
        if self.no_smoothing { &[] } else { &self.smoothing[..] }
    }

    /// The series named by `--input`, or a fresh random walk.
    pub fn load_series(&self) -> Result<TimeSeries> {
        match &self.input {
            Some(path) => SeriesFile::load_from_path(path),
            None => {
                let mut rng = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                Ok(random_walk(
                    &mut rng,
                    self.size,
                    DEMO.random_walk.step_amplitude,
                ))
            }
        }
    }
}

/// Main entry point for the binary: load, fit, report.
pub fn run(cli: &Cli) -> Result<String> {
    let series = cli.load_series()?;
    let factors = cli.smoothing_factors();

    log::info!(
        "Fitting trend lines to {} values with {} smoothing pass(es)",
        series.len(),
        factors.len()
    );
    let lines = fit_trend_lines(&series, factors)?;

    let report = FitReport::new(series, factors, lines);
    if cli.json {
        Ok(report.to_json()?)
    } else {
        Ok(report.to_table())
    }
}
