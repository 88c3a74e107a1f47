//! Elementwise comparison of a transform against a reference oracle.
//!
//! Floating-point recursive and closed-form DFTs never agree bit for bit, so
//! agreement is judged with an absolute plus relative tolerance, the same rule
//! as `numpy.allclose`:
//!
//! ```text
//! |actual[k] - expected[k]| <= abs + rel * |expected[k]|
//! ```
//!
//! A failed comparison is reported as a [`Verdict`], never as an error.

use core::fmt;

use crate::fft::{FftError, Transform};
use crate::num::{Complex, Float};

/// Default absolute tolerance (`numpy.allclose` default `atol`).
pub const DEFAULT_ABS_TOL: f64 = 1e-8;
/// Default relative tolerance (`numpy.allclose` default `rtol`).
pub const DEFAULT_REL_TOL: f64 = 1e-5;

#[cfg(feature = "std")]
pub const ABS_TOL_ENV: &str = "TUKEY_ABS_TOL";
#[cfg(feature = "std")]
pub const REL_TOL_ENV: &str = "TUKEY_REL_TOL";

/// Comparison tolerance. Defaults to `abs = 1e-8`, `rel = 1e-5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            abs: DEFAULT_ABS_TOL,
            rel: DEFAULT_REL_TOL,
        }
    }
}

impl Tolerance {
    pub fn new(abs: f64, rel: f64) -> Self {
        Self { abs, rel }
    }

    /// Loosen both bounds by `1 + log2(n)`.
    ///
    /// Rounding error of the recursive transform grows with the number of
    /// butterfly levels, so larger inputs get proportionally more slack.
    pub fn scaled_for(self, n: usize) -> Self {
        let levels = if n <= 1 { 0 } else { n.ilog2() + u32::from(!n.is_power_of_two()) };
        let factor = 1.0 + levels as f64;
        Self {
            abs: self.abs * factor,
            rel: self.rel * factor,
        }
    }

    /// Read `TUKEY_ABS_TOL` / `TUKEY_REL_TOL`, falling back to the defaults when
    /// a variable is unset or does not parse as a non-negative number.
    #[cfg(feature = "std")]
    pub fn from_env() -> Self {
        let abs = env_f64(ABS_TOL_ENV).unwrap_or(DEFAULT_ABS_TOL);
        let rel = env_f64(REL_TOL_ENV).unwrap_or(DEFAULT_REL_TOL);
        #[cfg(feature = "verbose-logging")]
        log::debug!("tolerance from environment: abs = {:e}, rel = {:e}", abs, rel);
        Self { abs, rel }
    }

    #[inline]
    fn allows(&self, deviation: f64, reference: f64) -> bool {
        deviation <= self.abs + self.rel * reference
    }
}

#[cfg(feature = "std")]
fn env_f64(key: &str) -> Option<f64> {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Outcome of an elementwise comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub passed: bool,
    pub len: usize,
    /// Largest `|actual[k] - expected[k]|`.
    pub max_abs_error: f64,
    /// Largest deviation divided by `|expected[k]|`, over entries with a non-zero reference.
    pub max_rel_error: f64,
    /// Index of the largest absolute deviation; `None` for empty sequences.
    pub worst_index: Option<usize>,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        write!(
            f,
            "{} (n = {}, max abs error {:.3e}, max rel error {:.3e}",
            status, self.len, self.max_abs_error, self.max_rel_error
        )?;
        if let Some(k) = self.worst_index {
            write!(f, " at index {}", k)?;
        }
        write!(f, ")")
    }
}

/// Compare two spectra elementwise.
pub fn compare<T: Float>(
    actual: &[Complex<T>],
    expected: &[Complex<T>],
    tol: Tolerance,
) -> Result<Verdict, FftError> {
    if actual.len() != expected.len() {
        return Err(FftError::MismatchedLengths {
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    let mut passed = true;
    let mut max_abs_error = 0.0f64;
    let mut max_rel_error = 0.0f64;
    let mut worst_index = None;

    for (k, (a, b)) in actual.iter().zip(expected.iter()).enumerate() {
        let mut deviation = (*a - *b).norm().to_f64();
        if !deviation.is_finite() {
            deviation = f64::INFINITY;
        }
        let reference = b.norm().to_f64();
        let finite = deviation.is_finite() && reference.is_finite();
        if !finite || !tol.allows(deviation, reference) {
            passed = false;
            #[cfg(feature = "verbose-logging")]
            log::trace!(
                "index {}: deviation {:e} exceeds tolerance (|expected| = {:e})",
                k,
                deviation,
                reference
            );
        }
        if worst_index.is_none() || deviation > max_abs_error {
            max_abs_error = deviation;
            worst_index = Some(k);
        }
        if !finite {
            max_rel_error = f64::INFINITY;
        } else if reference > 0.0 {
            max_rel_error = max_rel_error.max(deviation / reference);
        }
    }

    Ok(Verdict {
        passed,
        len: actual.len(),
        max_abs_error,
        max_rel_error,
        worst_index,
    })
}

/// Run `engine` and `oracle` on the same input and compare their spectra.
pub fn verify<T, E, O>(
    engine: &E,
    oracle: &O,
    input: &[Complex<T>],
    tol: Tolerance,
) -> Result<Verdict, FftError>
where
    T: Float,
    E: Transform<T> + ?Sized,
    O: Transform<T> + ?Sized,
{
    let actual = engine.transform(input)?;
    let expected = oracle.transform(input)?;
    let verdict = compare(&actual, &expected, tol)?;
    #[cfg(feature = "verbose-logging")]
    log::debug!("{} vs {}: {}", engine.name(), oracle.name(), verdict);
    Ok(verdict)
}

/// Relative Parseval error `|N·Σ|x|² − Σ|X|²| / (N·Σ|x|²)`.
///
/// Returns the absolute difference when the input has zero energy.
pub fn parseval_error<T: Float>(
    input: &[Complex<T>],
    spectrum: &[Complex<T>],
) -> Result<f64, FftError> {
    if input.len() != spectrum.len() {
        return Err(FftError::MismatchedLengths {
            expected: input.len(),
            actual: spectrum.len(),
        });
    }
    let n = input.len() as f64;
    let time: f64 = input.iter().map(|c| c.norm_sqr().to_f64()).sum::<f64>() * n;
    let freq: f64 = spectrum.iter().map(|c| c.norm_sqr().to_f64()).sum();
    let diff = (time - freq).abs();
    Ok(if time > 0.0 { diff / time } else { diff })
}
