//! Demonstrates enabling verbose logging for tukey.
use tukey::{verify, Complex64, DirectDft, RecursiveFft, Tolerance};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let signal: Vec<Complex64> = (0..16).map(|i| Complex64::from_real(i as f64)).collect();
    let tol = Tolerance::from_env();
    verify(&RecursiveFft, &DirectDft, &signal, tol).unwrap();

    // A zero tolerance makes every rounding difference show up at trace level.
    verify(&RecursiveFft, &DirectDft, &signal, Tolerance::new(0.0, 0.0)).unwrap();
}
