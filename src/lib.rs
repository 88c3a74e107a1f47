//! # tukey - recursive radix-2 FFT with a reference verification harness
//!
//! A small, dependency-light implementation of the Cooley–Tukey Fast Fourier
//! Transform in its textbook recursive decimation-in-time form, together with a
//! direct O(N²) DFT and tolerance-based comparison tools used to check one
//! against the other (or against any other reference implementation).
//!
//! ## Features
//!
//! - **Recursive radix-2 FFT** for lengths `0`, `1` and powers of two
//! - **Explicit length checking**: other lengths fail with [`FftError::InvalidLength`]
//! - **Inverse transform** and batch helpers
//! - **Direct DFT oracle** for any length
//! - **Verification harness** with `numpy.allclose`-style tolerances
//! - **`no_std` + `alloc`** compatible
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` for [`FftError`] and environment-based
//!   tolerance configuration ([`Tolerance::from_env`])
//! - `verbose-logging`: emit `log` records from the engine and the harness
//!
//! ## Example
//!
//! ```
//! use tukey::{fft, verify, Complex64, DirectDft, RecursiveFft, Tolerance};
//!
//! let x: Vec<Complex64> = [1.0, 1.0, 1.0, 1.0]
//!     .iter()
//!     .map(|&v| Complex64::from_real(v))
//!     .collect();
//! let spectrum = fft(&x).unwrap();
//! assert!((spectrum[0].re - 4.0).abs() < 1e-12);
//!
//! let verdict = verify(&RecursiveFft, &DirectDft, &x, Tolerance::default()).unwrap();
//! assert!(verdict.passed);
//! ```
//!
//! Run the demos with:
//! ```bash
//! cargo run --example basic_usage
//! cargo run --example verbose_logging --features verbose-logging
//! ```

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Complex numbers and the float abstraction behind them.
pub mod num;

/// Recursive radix-2 FFT engine and the [`Transform`] trait.
pub mod fft;

/// Direct O(N²) DFT used as a reference oracle.
pub mod dft;

/// Tolerance-based comparison between transforms.
pub mod verify;

pub use dft::{dft, DirectDft};
pub use fft::{fft, ifft, FftError, RecursiveFft, Transform};
pub use num::{Complex, Complex32, Complex64, Float};
pub use verify::{compare, parseval_error, verify, Tolerance, Verdict};
