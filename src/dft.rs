//! Direct O(N²) Discrete Fourier Transform.
//!
//! Straight evaluation of `X[k] = Σ x[n] exp(-2πi k n / N)`. Slow, but it accepts
//! every length and shares no code path with the recursive engine, which makes it
//! a trustworthy reference oracle.

use alloc::vec::Vec;

use crate::fft::{twiddle, FftError, Transform};
use crate::num::{Complex, Float};

/// Direct summation DFT.
pub fn dft<T: Float>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    let n = input.len();
    (0..n)
        .map(|k| {
            let mut sum = Complex::zero();
            for (j, &x) in input.iter().enumerate() {
                // (k * j) mod n keeps the angle inside one turn
                sum += x * twiddle::<T>((k * j) % n, n);
            }
            sum
        })
        .collect()
}

/// Reference oracle backed by [`dft`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DirectDft;

impl<T: Float> Transform<T> for DirectDft {
    fn transform(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        Ok(dft(input))
    }

    fn name(&self) -> &'static str {
        "direct-dft"
    }
}
