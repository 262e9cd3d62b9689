//! Run configuration and `--key=value` argument parsing.

use crate::error::CrossoverError;
use goldbach_core::{DEFAULT_QUADRATURE_LIMIT, DEFAULT_SERIES_ORDER};
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Sweep the sampling range and write records plus a summary.
    Collect,
    /// Print both predictors and S(N) for a few decades of N.
    Compare,
    /// Check G(N) against known ordered counts.
    Verify,
}

impl FromStr for Mode {
    type Err = CrossoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "collect" => Ok(Mode::Collect),
            "compare" => Ok(Mode::Compare),
            "verify" => Ok(Mode::Verify),
            other => Err(CrossoverError::InvalidOption {
                key: "mode".into(),
                value: other.into(),
            }),
        }
    }
}

/// Configuration for a data-collection run.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionConfig {
    pub mode: Mode,
    pub min_n: u64,
    pub max_n: u64,
    /// CSV file receiving one row per sampled N.
    pub output: PathBuf,
    /// Optional JSON file receiving the summary.
    pub summary_json: Option<PathBuf>,
    pub series_order: usize,
    pub quadrature_limit: usize,
    /// Log progress every this many completed points.
    pub progress_every: usize,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Collect,
            min_n: 1_000,
            max_n: 100_000,
            output: PathBuf::from("goldbach_data.csv"),
            summary_json: None,
            series_order: DEFAULT_SERIES_ORDER,
            quadrature_limit: DEFAULT_QUADRATURE_LIMIT,
            progress_every: 100,
        }
    }
}

impl CollectionConfig {
    /// Build a configuration from `--key=value` / `--flag` arguments,
    /// falling back to defaults for anything not given.
    pub fn from_args<I, S>(args: I) -> Result<Self, CrossoverError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let opts = parse_args(args);
        let defaults = Self::default();

        let mode = match opts.get("mode") {
            Some(m) => m.parse()?,
            None => defaults.mode,
        };

        let config = Self {
            mode,
            min_n: parse_opt(&opts, "min-n", defaults.min_n)?,
            max_n: parse_opt(&opts, "max-n", defaults.max_n)?,
            output: opts
                .get("output")
                .map(PathBuf::from)
                .unwrap_or(defaults.output),
            summary_json: opts.get("summary-json").map(PathBuf::from),
            series_order: parse_opt(&opts, "order", defaults.series_order)?,
            quadrature_limit: parse_opt(&opts, "quadrature-limit", defaults.quadrature_limit)?,
            progress_every: parse_opt(&opts, "progress-every", defaults.progress_every)?,
        };

        if config.min_n > config.max_n {
            return Err(CrossoverError::InvalidRange {
                min: config.min_n,
                max: config.max_n,
            });
        }
        Ok(config)
    }
}

fn parse_args<I, S>(args: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = HashMap::new();
    for arg in args {
        if let Some(kv) = arg.as_ref().strip_prefix("--") {
            if let Some((k, v)) = kv.split_once('=') {
                map.insert(k.to_string(), v.to_string());
            } else {
                map.insert(kv.to_string(), "true".to_string());
            }
        }
    }
    map
}

/// Parse an option, accepting `_` digit separators (`--max-n=1_000_000`).
fn parse_opt<T: FromStr>(
    opts: &HashMap<String, String>,
    key: &str,
    default: T,
) -> Result<T, CrossoverError> {
    match opts.get(key) {
        None => Ok(default),
        Some(v) => v
            .replace('_', "")
            .parse()
            .map_err(|_| CrossoverError::InvalidOption {
                key: key.to_string(),
                value: v.clone(),
            }),
    }
}
