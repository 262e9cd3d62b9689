//! CSV and JSON persistence.

use crate::collect::CrossoverRecord;
use crate::error::CrossoverError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub const CSV_HEADER: &str =
    "N,G_N,Series_Pred,Integral_Pred,Series_Bias,Integral_Bias,Abs_Bias_Series,Abs_Bias_Integral";

/// Write one CSV row per record, creating parent directories as needed.
pub fn write_csv(records: &[CrossoverRecord], path: &Path) -> Result<(), CrossoverError> {
    create_parent(path)?;
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "{CSV_HEADER}")?;
    for r in records {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{}",
            r.n,
            r.g_n,
            r.series_pred,
            r.integral_pred,
            r.series_bias,
            r.integral_bias,
            r.abs_bias_series,
            r.abs_bias_integral
        )?;
    }
    out.flush()?;
    Ok(())
}

/// Pretty-printed JSON, creating parent directories as needed.
pub fn write_json<T: serde::Serialize>(value: &T, path: &Path) -> Result<(), CrossoverError> {
    create_parent(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn create_parent(path: &Path) -> Result<(), CrossoverError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
