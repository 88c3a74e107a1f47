// Agreement between the recursive engine and rustfft as a library reference oracle.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustfft::num_complex::Complex as RustComplex;
use rustfft::FftPlanner as RustFftPlanner;
use tukey::fft::{FftError, Transform};
use tukey::{verify, Complex64, RecursiveFft, Tolerance};

// Mirrors `sanity_check::RustFftOracle`; this crate cannot depend on the CLI crate.
struct RustFft;

impl Transform<f64> for RustFft {
    fn transform(&self, input: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
        if input.is_empty() {
            return Ok(Vec::new());
        }
        let plan = RustFftPlanner::<f64>::new().plan_fft_forward(input.len());
        let mut buf: Vec<RustComplex<f64>> =
            input.iter().map(|c| RustComplex::new(c.re, c.im)).collect();
        plan.process(&mut buf);
        Ok(buf.into_iter().map(|c| Complex64::new(c.re, c.im)).collect())
    }

    fn name(&self) -> &'static str {
        "rustfft"
    }
}

#[test]
fn random_real_signals_match_rustfft() {
    let mut rng = StdRng::seed_from_u64(2024);
    for n in [0usize, 1, 2, 4, 8, 16, 32] {
        let x: Vec<Complex64> = (0..n)
            .map(|_| Complex64::from_real(rng.gen_range(0.0..1.0)))
            .collect();
        let verdict = verify(&RecursiveFft, &RustFft, &x, Tolerance::default()).unwrap();
        assert!(verdict.passed, "n = {}: {}", n, verdict);
    }
}

#[test]
fn random_complex_signals_match_rustfft() {
    let mut rng = StdRng::seed_from_u64(77);
    for shift in 0..=12u32 {
        let n = 1usize << shift;
        let x: Vec<Complex64> = (0..n)
            .map(|_| Complex64::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)))
            .collect();
        let tol = Tolerance::default().scaled_for(n);
        let verdict = verify(&RecursiveFft, &RustFft, &x, tol).unwrap();
        assert!(verdict.passed, "n = {}: {}", n, verdict);
    }
}

#[test]
fn transform_into_fills_caller_buffer() {
    let x: Vec<Complex64> = (0..8).map(|i| Complex64::new(i as f64, -(i as f64))).collect();
    let mut out = vec![Complex64::zero(); 8];
    RecursiveFft.transform_into(&x, &mut out).unwrap();
    let expected = RustFft.transform(&x).unwrap();
    for (a, b) in out.iter().zip(expected.iter()) {
        assert!((a.re - b.re).abs() < 1e-12 && (a.im - b.im).abs() < 1e-12);
    }
}
