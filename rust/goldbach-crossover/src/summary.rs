//! Aggregate statistics over a collection run.

use crate::collect::CrossoverRecord;
use serde::{Deserialize, Serialize};

/// Absolute-bias statistics for one predictor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodStats {
    pub mean_abs_bias: f64,
    pub median_abs_bias: f64,
}

/// Largest |series bias| / |integral bias| seen in a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakAdvantage {
    pub n: u64,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossoverSummary {
    pub points: usize,
    pub series: MethodStats,
    pub integral: MethodStats,
    /// Points where each predictor is strictly closer.
    pub series_wins: usize,
    pub integral_wins: usize,
    /// First N at which the integral form wins, if both forms win somewhere.
    pub crossover_n: Option<u64>,
    pub peak_advantage: Option<PeakAdvantage>,
}

/// Summarise a run; `None` when there are no records.
pub fn summarize(records: &[CrossoverRecord]) -> Option<CrossoverSummary> {
    if records.is_empty() {
        return None;
    }
    let series_abs: Vec<f64> = records.iter().map(|r| r.abs_bias_series).collect();
    let integral_abs: Vec<f64> = records.iter().map(|r| r.abs_bias_integral).collect();

    Some(CrossoverSummary {
        points: records.len(),
        series: method_stats(&series_abs),
        integral: method_stats(&integral_abs),
        series_wins: records.iter().filter(|r| r.series_wins()).count(),
        integral_wins: records.iter().filter(|r| r.integral_wins()).count(),
        crossover_n: find_crossover(records),
        peak_advantage: peak_advantage(records),
    })
}

/// The first N (in record order) where the integral form is strictly more
/// accurate, provided the series form is strictly more accurate somewhere
/// too. Without both regimes there is no crossover.
pub fn find_crossover(records: &[CrossoverRecord]) -> Option<u64> {
    if !records.iter().any(|r| r.series_wins()) {
        return None;
    }
    records.iter().find(|r| r.integral_wins()).map(|r| r.n)
}

/// Record maximising |series bias| / |integral bias|, earliest on ties.
pub fn peak_advantage(records: &[CrossoverRecord]) -> Option<PeakAdvantage> {
    records
        .iter()
        .filter(|r| r.abs_bias_integral > 0.0)
        .map(|r| PeakAdvantage {
            n: r.n,
            ratio: r.abs_bias_series / r.abs_bias_integral,
        })
        .fold(None, |best: Option<PeakAdvantage>, cand| match best {
            Some(b) if b.ratio >= cand.ratio => Some(b),
            _ => Some(cand),
        })
}

fn method_stats(values: &[f64]) -> MethodStats {
    MethodStats {
        mean_abs_bias: mean(values),
        median_abs_bias: median(values),
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        0.5 * (sorted[mid - 1] + sorted[mid])
    } else {
        sorted[mid]
    }
}

/// Print a human-readable summary of a run.
pub fn print_summary(summary: &CrossoverSummary) {
    println!("\n{}", "=".repeat(70));
    println!("Summary Statistics:");
    println!("{}", "=".repeat(70));
    println!("\nTotal points collected: {}", summary.points);

    println!("\nSeries expansion:");
    println!("  Mean |bias|:   {:.2}%", summary.series.mean_abs_bias * 100.0);
    println!("  Median |bias|: {:.2}%", summary.series.median_abs_bias * 100.0);
    println!("\nLogarithmic integral:");
    println!("  Mean |bias|:   {:.2}%", summary.integral.mean_abs_bias * 100.0);
    println!("  Median |bias|: {:.2}%", summary.integral.median_abs_bias * 100.0);

    println!(
        "\nSeries closer at {} points, integral closer at {} points",
        summary.series_wins, summary.integral_wins
    );
    match summary.crossover_n {
        Some(n) => println!("Crossover point: N ~ {}", n),
        None => println!("No crossover in sampled range"),
    }
    if let Some(peak) = summary.peak_advantage {
        println!("Peak advantage: {:.1}x at N = {}", peak.ratio, peak.n);
    }
}
