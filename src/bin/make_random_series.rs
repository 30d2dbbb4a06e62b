use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use trend_lines::config::DEMO;
use trend_lines::data::{SeriesFile, random_walk};

/// Write a random-walk series to a JSON file for later `trend-lines --input`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of points
    #[arg(long, default_value_t = DEMO.random_walk.size)]
    size: usize,

    /// Seed (fresh entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Destination file
    #[arg(long, default_value = DEMO.default_output_path)]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let series = random_walk(&mut rng, args.size, DEMO.random_walk.step_amplitude);

    SeriesFile::save_to_path(&series, &args.output)
        .with_context(|| format!("Failed to write random series to {:?}", args.output))?;

    println!(
        "✅ Random series of {} values written to {:?}",
        series.len(),
        args.output
    );
    Ok(())
}
