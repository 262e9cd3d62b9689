//! Globally adaptive Gauss-Kronrod quadrature.
//!
//! Each subinterval is evaluated with the 15-point Kronrod rule and its
//! embedded 7-point Gauss rule; the difference drives the error estimate.
//! The subinterval with the largest estimated error is bisected until the
//! total error meets tolerance or the subdivision limit is reached. On
//! hitting the limit the best estimate is still returned, flagged as not
//! converged.

use serde::{Deserialize, Serialize};

/// Kronrod abscissae on [0, 1]; odd indices are the Gauss-7 nodes.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_639_206_854_697_526_329,
    0.949_107_912_342_758_524_526_189_684_047_851,
    0.864_864_423_359_769_072_789_712_788_640_926,
    0.741_531_185_599_394_439_863_864_773_280_788,
    0.586_087_235_467_691_130_294_144_845_693_013,
    0.405_845_151_377_397_166_906_606_412_076_961,
    0.207_784_955_007_898_467_600_689_403_773_245,
    0.0,
];

const WGK: [f64; 8] = [
    0.022_935_322_010_529_224_963_732_008_058_970,
    0.063_092_092_629_978_553_290_700_663_189_204,
    0.104_790_010_322_250_183_839_876_322_541_518,
    0.140_653_259_715_525_918_745_189_590_510_238,
    0.169_004_726_639_267_902_826_583_426_598_550,
    0.190_350_578_064_785_409_913_256_402_421_014,
    0.204_432_940_075_298_892_414_161_999_234_649,
    0.209_482_141_084_727_828_012_999_174_891_714,
];

const WG: [f64; 4] = [
    0.129_484_966_168_869_693_270_611_432_679_082,
    0.279_705_391_489_276_667_901_467_771_423_780,
    0.381_830_050_505_118_944_950_369_775_488_975,
    0.417_959_183_673_469_387_755_102_040_816_327,
];

pub const DEFAULT_SUBDIVISION_LIMIT: usize = 200;
pub const DEFAULT_EPS_ABS: f64 = 1.49e-8;
pub const DEFAULT_EPS_REL: f64 = 1.49e-8;

/// Outcome of one definite integral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadratureResult {
    pub value: f64,
    /// Estimated absolute error of `value`.
    pub abs_error: f64,
    /// Number of subintervals in the final partition.
    pub intervals: usize,
    /// Whether the requested tolerance was met.
    pub converged: bool,
}

/// Definite integration of a scalar kernel over `[a, b]`.
pub trait Integrator {
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> QuadratureResult
    where
        F: Fn(f64) -> f64;
}

/// Adaptive G7-K15 integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussKronrod {
    /// Maximum number of subintervals.
    pub limit: usize,
    pub eps_abs: f64,
    pub eps_rel: f64,
}

impl Default for GaussKronrod {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SUBDIVISION_LIMIT,
            eps_abs: DEFAULT_EPS_ABS,
            eps_rel: DEFAULT_EPS_REL,
        }
    }
}

impl GaussKronrod {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    fn tolerance(&self, value: f64) -> f64 {
        self.eps_abs.max(self.eps_rel * value.abs())
    }
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

impl Segment {
    fn evaluate<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> Self {
        let (value, error) = kronrod15(f, a, b);
        Segment { a, b, value, error }
    }
}

impl Integrator for GaussKronrod {
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> QuadratureResult
    where
        F: Fn(f64) -> f64,
    {
        if a == b {
            return QuadratureResult {
                value: 0.0,
                abs_error: 0.0,
                intervals: 0,
                converged: true,
            };
        }

        let limit = self.limit.max(1);
        let mut segments = vec![Segment::evaluate(&f, a, b)];

        loop {
            let value: f64 = segments.iter().map(|s| s.value).sum();
            let abs_error: f64 = segments.iter().map(|s| s.error).sum();

            if abs_error <= self.tolerance(value) {
                return QuadratureResult {
                    value,
                    abs_error,
                    intervals: segments.len(),
                    converged: true,
                };
            }

            let worst = segments
                .iter()
                .enumerate()
                .max_by(|(_, x), (_, y)| x.error.total_cmp(&y.error))
                .map(|(i, _)| i)
                .unwrap_or(0);
            let Segment { a: lo, b: hi, .. } = segments[worst];
            let mid = 0.5 * (lo + hi);

            // Stop once the limit is reached or the interval can no longer be
            // split in floating point.
            if segments.len() >= limit || mid <= lo.min(hi) || mid >= lo.max(hi) {
                return QuadratureResult {
                    value,
                    abs_error,
                    intervals: segments.len(),
                    converged: false,
                };
            }

            segments[worst] = Segment::evaluate(&f, lo, mid);
            segments.push(Segment::evaluate(&f, mid, hi));
        }
    }
}

/// One application of the 15-point Kronrod rule with its Gauss-7 error
/// estimate, scaled as in QUADPACK's QK15.
fn kronrod15<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> (f64, f64) {
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);
    let abs_half = half.abs();

    let fc = f(center);
    let mut res_gauss = fc * WG[3];
    let mut res_kronrod = fc * WGK[7];
    let mut res_abs = res_kronrod.abs();

    let mut fv1 = [0.0f64; 7];
    let mut fv2 = [0.0f64; 7];

    for j in 0..3 {
        let jt = 2 * j + 1;
        let dx = half * XGK[jt];
        let f1 = f(center - dx);
        let f2 = f(center + dx);
        fv1[jt] = f1;
        fv2[jt] = f2;
        res_gauss += WG[j] * (f1 + f2);
        res_kronrod += WGK[jt] * (f1 + f2);
        res_abs += WGK[jt] * (f1.abs() + f2.abs());
    }
    for j in 0..4 {
        let jt = 2 * j;
        let dx = half * XGK[jt];
        let f1 = f(center - dx);
        let f2 = f(center + dx);
        fv1[jt] = f1;
        fv2[jt] = f2;
        res_kronrod += WGK[jt] * (f1 + f2);
        res_abs += WGK[jt] * (f1.abs() + f2.abs());
    }

    let mean = 0.5 * res_kronrod;
    let mut res_asc = WGK[7] * (fc - mean).abs();
    for j in 0..7 {
        res_asc += WGK[j] * ((fv1[j] - mean).abs() + (fv2[j] - mean).abs());
    }

    let result = res_kronrod * half;
    res_abs *= abs_half;
    res_asc *= abs_half;

    let mut error = ((res_kronrod - res_gauss) * half).abs();
    if res_asc != 0.0 && error != 0.0 {
        error = res_asc * (200.0 * error / res_asc).powf(1.5).min(1.0);
    }
    if res_abs > f64::MIN_POSITIVE / (50.0 * f64::EPSILON) {
        error = error.max(50.0 * f64::EPSILON * res_abs);
    }
    (result, error)
}
