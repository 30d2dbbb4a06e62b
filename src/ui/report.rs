use serde::Serialize;
use std::fmt::Write;
use strum::IntoEnumIterator;

use crate::models::{LineKind, SampledTrendLines, TimeSeries, TrendLines};

/// Everything the CLI prints for one fit.
#[derive(Debug, Clone, Serialize)]
pub struct FitReport {
    pub smoothing_factors: Vec<f64>,
    pub lines: TrendLines,
    pub series: TimeSeries,
    pub sampled: SampledTrendLines,
}

impl FitReport {
    pub fn new(series: TimeSeries, smoothing_factors: &[f64], lines: TrendLines) -> Self {
        let sampled = lines.evaluate(series.len());
        FitReport {
            smoothing_factors: smoothing_factors.to_vec(),
            lines,
            series,
            sampled,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Line summary followed by one row per index.
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Smoothing factors: {:?}", self.smoothing_factors);
        for kind in LineKind::iter() {
            let line = self.lines.line(kind);
            let _ = writeln!(
                out,
                "{:<10} pivot ({}, {:.4}) theta {:+.6} rad, slope {:+.6}",
                kind.to_string(),
                line.pivot.time,
                line.pivot.value,
                line.theta,
                line.slope()
            );
        }
        let _ = writeln!(
            out,
            "\n{:>5} {:>12} {:>12} {:>12} {:>12}",
            "t", "series", "resistance", "support", "average"
        );
        for t in 0..self.series.len() {
            let _ = writeln!(
                out,
                "{:>5} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
                t,
                self.series[t],
                self.sampled.resistance[t],
                self.sampled.support[t],
                self.sampled.average[t]
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fit_trend_lines;

    fn report() -> FitReport {
        let series = TimeSeries::from(vec![1.0, 3.0, 2.0, 5.0, 4.0]);
        let lines = fit_trend_lines(&series, &[]).unwrap();
        FitReport::new(series, &[], lines)
    }

    #[test]
    fn table_has_a_row_per_index() {
        let table = report().to_table();
        assert!(table.contains("resistance pivot (3, 5.0000)"));
        // 1 factor line + 3 line summaries + blank + header + 5 rows
        assert_eq!(table.lines().count(), 11);
    }

    #[test]
    fn json_carries_lines_and_samples() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();
        assert_eq!(json["lines"]["resistance"]["pivot"]["time"], 3);
        assert_eq!(json["sampled"]["average"].as_array().unwrap().len(), 5);
        assert_eq!(json["series"].as_array().unwrap().len(), 5);
    }
}
