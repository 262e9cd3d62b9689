//! Per-N data collection over a shared prime table.

use crate::config::CollectionConfig;
use crate::error::CrossoverError;
use crate::output;
use crate::sampling::generate_sampling_points;
use crate::summary::{summarize, CrossoverSummary};
use goldbach_core::{evaluate_n, generate_primes, BiasReport, GoldbachError, PrimeTable};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// One sampled N: exact count, both predictions and their biases.
///
/// Field names serialize to the CSV column headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossoverRecord {
    #[serde(rename = "N")]
    pub n: u64,
    #[serde(rename = "G_N")]
    pub g_n: u64,
    #[serde(rename = "Series_Pred")]
    pub series_pred: f64,
    #[serde(rename = "Integral_Pred")]
    pub integral_pred: f64,
    #[serde(rename = "Series_Bias")]
    pub series_bias: f64,
    #[serde(rename = "Integral_Bias")]
    pub integral_bias: f64,
    #[serde(rename = "Abs_Bias_Series")]
    pub abs_bias_series: f64,
    #[serde(rename = "Abs_Bias_Integral")]
    pub abs_bias_integral: f64,
}

impl From<BiasReport> for CrossoverRecord {
    fn from(r: BiasReport) -> Self {
        CrossoverRecord {
            n: r.n,
            g_n: r.exact,
            series_pred: r.series,
            integral_pred: r.integral,
            series_bias: r.series_bias.signed,
            integral_bias: r.integral_bias.signed,
            abs_bias_series: r.series_bias.absolute,
            abs_bias_integral: r.integral_bias.absolute,
        }
    }
}

impl CrossoverRecord {
    pub fn integral_wins(&self) -> bool {
        self.abs_bias_integral < self.abs_bias_series
    }

    pub fn series_wins(&self) -> bool {
        self.abs_bias_series < self.abs_bias_integral
    }
}

/// Evaluate a single N against `table`.
pub fn collect_record(
    n: u64,
    table: &PrimeTable,
    series_order: usize,
    quadrature_limit: usize,
) -> Result<CrossoverRecord, GoldbachError> {
    evaluate_n(n, table, series_order, quadrature_limit).map(CrossoverRecord::from)
}

/// Evaluate every N in parallel, sharing `table` read-only.
///
/// Records come back in the order of `n_values`. The first invalid N aborts
/// the run.
pub fn collect_data(
    n_values: &[u64],
    table: &PrimeTable,
    config: &CollectionConfig,
) -> Result<Vec<CrossoverRecord>, CrossoverError> {
    let total = n_values.len();
    let done = AtomicUsize::new(0);
    let start = Instant::now();

    let records = n_values
        .par_iter()
        .map(|&n| -> Result<CrossoverRecord, GoldbachError> {
            let record = collect_record(n, table, config.series_order, config.quadrature_limit)?;
            let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
            if config.progress_every > 0
                && (finished % config.progress_every == 0 || finished == total)
            {
                log_progress(finished, total, start.elapsed());
            }
            Ok(record)
        })
        .collect::<Result<Vec<_>, GoldbachError>>()?;

    Ok(records)
}

fn log_progress(finished: usize, total: usize, elapsed: Duration) {
    let secs = elapsed.as_secs_f64();
    let rate = if secs > 0.0 { finished as f64 / secs } else { 0.0 };
    let remaining = if rate > 0.0 {
        (total - finished) as f64 / rate
    } else {
        0.0
    };
    log::info!(
        "Progress: {}/{} ({:.1}%) - {:.0}s elapsed, ~{:.0}s remaining",
        finished,
        total,
        100.0 * finished as f64 / total as f64,
        secs,
        remaining
    );
}

/// Full collection run: sample, sieve once, evaluate, persist.
pub fn run_collection(
    config: &CollectionConfig,
) -> Result<(Vec<CrossoverRecord>, Option<CrossoverSummary>), CrossoverError> {
    let n_values = generate_sampling_points(config.min_n, config.max_n)?;
    log::info!("{} sampling points in [{}, {}]", n_values.len(), config.min_n, config.max_n);

    let sieve_start = Instant::now();
    let table = generate_primes(config.max_n);
    log::info!(
        "Generated {} primes up to {} in {:.1}s",
        table.len(),
        config.max_n,
        sieve_start.elapsed().as_secs_f64()
    );

    let records = collect_data(&n_values, &table, config)?;
    output::write_csv(&records, &config.output)?;
    log::info!("Wrote {} records to {}", records.len(), config.output.display());

    let summary = summarize(&records);
    if let (Some(summary), Some(path)) = (&summary, &config.summary_json) {
        output::write_json(summary, path)?;
        log::info!("Wrote summary to {}", path.display());
    }
    Ok((records, summary))
}
