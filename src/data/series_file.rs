use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result, ensure};

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;
use crate::models::TimeSeries;

/// A series stored on disk as a plain JSON array of numbers.
pub struct SeriesFile;

impl SeriesFile {
    pub fn load_from_path(path: &Path) -> Result<TimeSeries> {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_serde {
            log::info!("Loading series from {:?}...", path);
        }
        let file = File::open(path).context(format!("Failed to open series file: {:?}", path))?;
        let reader = BufReader::new(file);
        let series: TimeSeries = serde_json::from_reader(reader)
            .context(format!("Failed to parse series file: {:?}", path))?;
        ensure!(!series.is_empty(), "Series file {:?} holds no values", path);
        Ok(series)
    }

    pub fn save_to_path(series: &TimeSeries, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, series)
            .context(format!("Failed to write series to: {}", path.display()))?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_serde {
            log::info!("Series of {} values written to {}", series.len(), path.display());
        }
        Ok(())
    }
}
