//! Fast Fourier Transform (FFT) engine.
//!
//! This module implements the recursive radix-2
//! [Cooley–Tukey algorithm](https://en.wikipedia.org/wiki/Cooley%E2%80%93Tukey_FFT_algorithm)
//! in its decimation-in-time form. Each level splits the input into even and odd
//! samples, transforms both halves and combines them with twiddle factors
//! `exp(-2πi k / N)`. Lengths must be `0`, `1` or a power of two; anything else is
//! rejected with [`FftError::InvalidLength`] instead of being silently mis-split.
//!
//! ```
//! use tukey::fft::{fft, RecursiveFft, Transform};
//! use tukey::Complex64;
//!
//! let impulse = [
//!     Complex64::new(1.0, 0.0),
//!     Complex64::zero(),
//!     Complex64::zero(),
//!     Complex64::zero(),
//! ];
//! let spectrum = fft(&impulse).unwrap();
//! assert!(spectrum.iter().all(|c| (c.re - 1.0).abs() < 1e-12 && c.im.abs() < 1e-12));
//!
//! let engine = RecursiveFft;
//! assert!(engine.transform(&impulse[..3]).is_err());
//! ```

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

pub use crate::num::{Complex, Complex32, Complex64, Float};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// Input length is not 0, 1 or a power of two.
    InvalidLength(usize),
    /// Two sequences that must agree in length do not.
    MismatchedLengths { expected: usize, actual: usize },
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(n) => write!(
                f,
                "invalid transform length {} (expected 0, 1 or a power of two)",
                n
            ),
            Self::MismatchedLengths { expected, actual } => write!(
                f,
                "mismatched sequence lengths: expected {}, got {}",
                expected, actual
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// A forward DFT. Implemented by the recursive engine and by every reference
/// oracle it is checked against.
pub trait Transform<T: Float> {
    fn transform(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError>;

    /// Short label used in reports and logs.
    fn name(&self) -> &'static str;

    /// Out-of-place transform into a caller-provided buffer of the same length.
    fn transform_into(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        if input.len() != output.len() {
            return Err(FftError::MismatchedLengths {
                expected: input.len(),
                actual: output.len(),
            });
        }
        let spectrum = self.transform(input)?;
        output.copy_from_slice(&spectrum);
        Ok(())
    }
}

/// Ensure `n` can be split evenly at every recursion level.
pub fn check_length(n: usize) -> Result<(), FftError> {
    if n <= 1 || n.is_power_of_two() {
        Ok(())
    } else {
        Err(FftError::InvalidLength(n))
    }
}

/// Twiddle factor `exp(-2πi k / n)`.
///
/// The angle is formed in `f64` and only then narrowed to `T`, so the phase of
/// single-precision twiddles is as accurate as `T` can hold.
#[inline]
pub fn twiddle<T: Float>(k: usize, n: usize) -> Complex<T> {
    let angle = -2.0 * core::f64::consts::PI * (k as f64) / (n as f64);
    Complex::expi(T::from_f64(angle))
}

/// Recursive radix-2 decimation-in-time FFT.
///
/// Every level allocates its own even/odd subsequences and output buffer, so the
/// transform needs `O(N log N)` auxiliary memory and recurses `log2(N)` deep.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecursiveFft;

impl RecursiveFft {
    /// Inverse transform: `x[n] = 1/N Σ X[k] exp(+2πi k n / N)`.
    ///
    /// Computed as `conj(fft(conj(X))) / N`.
    pub fn inverse<T: Float>(&self, spectrum: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let n = spectrum.len();
        check_length(n)?;
        if n == 0 {
            return Ok(Vec::new());
        }
        let conjugated: Vec<Complex<T>> = spectrum.iter().map(|c| c.conj()).collect();
        let forward = split_radix2(&conjugated);
        let inv_n = T::one() / T::from_f64(n as f64);
        Ok(forward.into_iter().map(|c| c.conj().scale(inv_n)).collect())
    }
}

impl<T: Float> Transform<T> for RecursiveFft {
    fn transform(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let n = input.len();
        if let Err(e) = check_length(n) {
            #[cfg(feature = "verbose-logging")]
            log::warn!("rejecting transform of length {}", n);
            return Err(e);
        }
        #[cfg(feature = "verbose-logging")]
        log::debug!("recursive fft: n = {}, depth = {}", n, n.trailing_zeros());
        Ok(split_radix2(input))
    }

    fn name(&self) -> &'static str {
        "recursive-fft"
    }
}

// Length has already been validated; every level halves a power of two.
fn split_radix2<T: Float>(x: &[Complex<T>]) -> Vec<Complex<T>> {
    let n = x.len();
    if n <= 1 {
        return x.to_vec();
    }
    let half = n / 2;

    let even: Vec<Complex<T>> = x.iter().step_by(2).copied().collect();
    let odd: Vec<Complex<T>> = x.iter().skip(1).step_by(2).copied().collect();
    debug_assert_eq!(even.len(), half);
    debug_assert_eq!(odd.len(), half);

    let e = split_radix2(&even);
    let o = split_radix2(&odd);

    let mut out = vec![Complex::zero(); n];
    let (lo, hi) = out.split_at_mut(half);
    for k in 0..half {
        let t = twiddle::<T>(k, n) * o[k];
        lo[k] = e[k] + t;
        hi[k] = e[k] - t;
    }
    out
}

/// Forward FFT with the default engine.
pub fn fft<T: Float>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    RecursiveFft.transform(input)
}

/// Inverse FFT with the default engine.
pub fn ifft<T: Float>(spectrum: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    RecursiveFft.inverse(spectrum)
}

/// Batch FFT: transform each sequence, stopping at the first invalid one.
pub fn batch<T: Float, F: Transform<T>>(
    engine: &F,
    inputs: &[Vec<Complex<T>>],
) -> Result<Vec<Vec<Complex<T>>>, FftError> {
    inputs.iter().map(|x| engine.transform(x)).collect()
}
