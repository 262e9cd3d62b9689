//! Relative error of a prediction against the exact count.

use crate::error::{GoldbachError, Result};
use serde::{Deserialize, Serialize};

/// Signed relative error (prediction - exact) / exact and its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bias {
    pub signed: f64,
    pub absolute: f64,
}

/// Relative bias of one prediction.
///
/// An exact count of zero has no relative error and yields
/// [`GoldbachError::UndefinedBias`] instead of an infinity or NaN.
pub fn relative_bias(prediction: f64, exact: u64) -> Result<Bias> {
    if exact == 0 {
        return Err(GoldbachError::UndefinedBias);
    }
    if !prediction.is_finite() {
        return Err(GoldbachError::InvalidArgument(format!(
            "prediction must be finite, got {prediction}"
        )));
    }
    let exact = exact as f64;
    let signed = (prediction - exact) / exact;
    Ok(Bias {
        signed,
        absolute: signed.abs(),
    })
}

/// Both predictors scored against G(N).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiasReport {
    pub n: u64,
    pub exact: u64,
    pub series: f64,
    pub integral: f64,
    pub series_bias: Bias,
    pub integral_bias: Bias,
}

impl BiasReport {
    /// The integral form is strictly closer to the exact count.
    pub fn integral_wins(&self) -> bool {
        self.integral_bias.absolute < self.series_bias.absolute
    }

    /// The series form is strictly closer to the exact count.
    pub fn series_wins(&self) -> bool {
        self.series_bias.absolute < self.integral_bias.absolute
    }

    /// |series bias| / |integral bias|; `None` when the integral is exact.
    pub fn advantage_ratio(&self) -> Option<f64> {
        if self.integral_bias.absolute == 0.0 {
            None
        } else {
            Some(self.series_bias.absolute / self.integral_bias.absolute)
        }
    }
}

/// Score the series and integral predictions for N against its exact count.
pub fn evaluate_bias(n: u64, exact: u64, series: f64, integral: f64) -> Result<BiasReport> {
    Ok(BiasReport {
        n,
        exact,
        series,
        integral,
        series_bias: relative_bias(series, exact)?,
        integral_bias: relative_bias(integral, exact)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_and_absolute() {
        let b = relative_bias(80.0, 100).unwrap();
        assert!((b.signed + 0.2).abs() < 1e-15);
        assert!((b.absolute - 0.2).abs() < 1e-15);

        let b = relative_bias(150.0, 100).unwrap();
        assert!((b.signed - 0.5).abs() < 1e-15);
        assert_eq!(b.signed, b.absolute);
    }

    #[test]
    fn test_exact_prediction_has_zero_bias() {
        let b = relative_bias(56.0, 56).unwrap();
        assert_eq!(b.signed, 0.0);
        assert_eq!(b.absolute, 0.0);
    }

    #[test]
    fn test_zero_count_is_undefined() {
        assert_eq!(relative_bias(1.0, 0), Err(GoldbachError::UndefinedBias));
        assert_eq!(
            evaluate_bias(4, 0, 1.0, 1.0),
            Err(GoldbachError::UndefinedBias)
        );
    }

    #[test]
    fn test_non_finite_prediction_rejected() {
        assert!(matches!(
            relative_bias(f64::NAN, 10),
            Err(GoldbachError::InvalidArgument(_))
        ));
        assert!(matches!(
            relative_bias(f64::INFINITY, 10),
            Err(GoldbachError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_report_winner_and_ratio() {
        let report = evaluate_bias(1_000, 56, 40.0, 43.0).unwrap();
        assert!(report.integral_wins());
        assert!(!report.series_wins());
        let ratio = report.advantage_ratio().unwrap();
        assert!((ratio - 16.0 / 13.0).abs() < 1e-12);

        let tie = evaluate_bias(1_000, 56, 50.0, 62.0).unwrap();
        assert!(!tie.integral_wins() && !tie.series_wins());

        let exact = evaluate_bias(10, 3, 4.0, 3.0).unwrap();
        assert_eq!(exact.advantage_ratio(), None);
    }
}
