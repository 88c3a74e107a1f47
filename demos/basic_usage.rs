//! Basic usage example for tukey
//!
//! Transforms a few small signals, inverts one of them and checks the
//! recursive engine against the direct DFT.

use tukey::fft::batch;
use tukey::{fft, ifft, verify, Complex64, DirectDft, RecursiveFft, Tolerance};

fn main() {
    println!("=== tukey Basic Usage Example ===\n");

    // 1. Forward FFT of a unit impulse
    println!("1. Forward FFT");
    let impulse: Vec<Complex64> = [1.0, 0.0, 0.0, 0.0]
        .iter()
        .map(|&v| Complex64::from_real(v))
        .collect();
    let spectrum = fft(&impulse).unwrap();
    println!("   Input: {:?}", impulse.iter().map(|c| c.re).collect::<Vec<_>>());
    println!(
        "   FFT: {:?}",
        spectrum
            .iter()
            .map(|c| format!("{:.2}{:+.2}i", c.re, c.im))
            .collect::<Vec<_>>()
    );

    // 2. Inverse FFT
    println!("\n2. Inverse FFT");
    let ramp: Vec<Complex64> = (0..8).map(|i| Complex64::from_real(i as f64)).collect();
    let back = ifft(&fft(&ramp).unwrap()).unwrap();
    let rounded: Vec<_> = back.iter().map(|c| format!("{:.3}", c.re)).collect();
    println!("   Round trip: {:?}", rounded);

    // 3. Batch
    println!("\n3. Batch FFT");
    let signals = [impulse.clone(), vec![Complex64::from_real(1.0); 4]];
    let spectra = batch(&RecursiveFft, &signals).unwrap();
    for (i, s) in spectra.iter().enumerate() {
        println!("   #{}: DC = {:.2}", i, s[0].re);
    }

    // 4. Verification against the direct DFT
    println!("\n4. Verification");
    let signal: Vec<Complex64> = (0..32)
        .map(|i| Complex64::new((i as f64 * 0.4).sin(), (i as f64 * 0.9).cos()))
        .collect();
    let verdict = verify(&RecursiveFft, &DirectDft, &signal, Tolerance::default()).unwrap();
    println!("   {}", verdict);

    // 5. Invalid lengths are rejected
    println!("\n5. Length check");
    match fft(&signal[..6]) {
        Ok(_) => println!("   unexpected success"),
        Err(e) => println!("   {}", e),
    }
}
