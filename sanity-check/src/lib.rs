use clap::ValueEnum;
use rand::Rng;
use rustfft::num_complex::Complex as RustComplex;
use rustfft::FftPlanner;
use std::fmt::Write as _;
use tukey::fft::{check_length, FftError, Transform};
use tukey::{compare, Complex64, DirectDft, RecursiveFft, Tolerance, Verdict};

/// Reference transform to compare the recursive FFT against.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OracleKind {
    /// Direct O(N²) summation from the tukey crate
    Direct,
    /// rustfft's planned FFT
    Rustfft,
}

impl OracleKind {
    pub fn build(self) -> Box<dyn Transform<f64>> {
        match self {
            OracleKind::Direct => Box::new(DirectDft),
            OracleKind::Rustfft => Box::new(RustFftOracle),
        }
    }
}

/// Library reference oracle backed by `rustfft`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustFftOracle;

impl Transform<f64> for RustFftOracle {
    fn transform(&self, input: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
        if input.is_empty() {
            return Ok(Vec::new());
        }
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(input.len());
        let mut buffer: Vec<RustComplex<f64>> = input
            .iter()
            .map(|c| RustComplex::new(c.re, c.im))
            .collect();
        fft.process(&mut buffer);
        Ok(buffer.iter().map(|c| Complex64::new(c.re, c.im)).collect())
    }

    fn name(&self) -> &'static str {
        "rustfft"
    }
}

/// Uniform samples in `[0, 1)`; the imaginary part is zero unless `complex`.
pub fn random_signal<R: Rng + ?Sized>(rng: &mut R, n: usize, complex: bool) -> Vec<Complex64> {
    (0..n)
        .map(|_| {
            let re = rng.gen_range(0.0..1.0);
            let im = if complex { rng.gen_range(0.0..1.0) } else { 0.0 };
            Complex64::new(re, im)
        })
        .collect()
}

/// Parse a command-line tolerance; only finite, non-negative values are accepted.
pub fn parse_tolerance(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{}` is not a number", s))?;
    if !v.is_finite() || v < 0.0 {
        return Err(format!("tolerance must be finite and non-negative, got {}", s));
    }
    Ok(v)
}

/// Start from the environment, apply command-line overrides, optionally scale for `n`.
pub fn resolve_tolerance(
    abs: Option<f64>,
    rel: Option<f64>,
    scale: bool,
    n: usize,
) -> Tolerance {
    let mut tol = Tolerance::from_env();
    if let Some(a) = abs {
        tol.abs = a;
    }
    if let Some(r) = rel {
        tol.rel = r;
    }
    if scale {
        tol = tol.scaled_for(n);
    }
    tol
}

/// Everything produced by one size of the comparison.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub size: usize,
    pub oracle: &'static str,
    pub input: Vec<Complex64>,
    pub output: Vec<Complex64>,
    pub reference: Vec<Complex64>,
    pub verdict: Verdict,
    pub parseval: f64,
}

/// Generate a random signal of `size` samples and compare the recursive FFT
/// against `oracle`.
pub fn run_check<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    oracle: &dyn Transform<f64>,
    tol: Tolerance,
    complex: bool,
) -> Result<CheckReport, FftError> {
    check_length(size)?;
    let input = random_signal(rng, size, complex);
    let output = RecursiveFft.transform(&input)?;
    let reference = oracle.transform(&input)?;
    let verdict = compare(&output, &reference, tol)?;
    let parseval = tukey::parseval_error(&input, &output)?;
    log::debug!(
        "n = {}: parseval error {:.3e}, tolerance abs {:e} rel {:e}",
        size,
        parseval,
        tol.abs,
        tol.rel
    );
    Ok(CheckReport {
        size,
        oracle: oracle.name(),
        input,
        output,
        reference,
        verdict,
        parseval,
    })
}

pub fn format_sequence(values: &[Complex64]) -> String {
    let mut s = String::from("[");
    for (i, c) in values.iter().enumerate() {
        if i > 0 {
            s.push_str(", ");
        }
        let _ = write!(s, "{:.6}{:+.6}i", c.re, c.im);
    }
    s.push(']');
    s
}

pub fn format_report(report: &CheckReport, show: bool) -> String {
    let mut out = String::new();
    if show {
        let _ = writeln!(out, "Input:         {}", format_sequence(&report.input));
        let _ = writeln!(out, "Custom FFT:    {}", format_sequence(&report.output));
        let _ = writeln!(out, "Reference FFT: {}", format_sequence(&report.reference));
    }
    let _ = write!(
        out,
        "n = {:<5} recursive-fft vs {}: {}",
        report.size, report.oracle, report.verdict
    );
    out
}
