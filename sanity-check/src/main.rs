use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sanity_check::{format_report, parse_tolerance, resolve_tolerance, run_check, OracleKind};
use std::error::Error;
use std::process::ExitCode;

/// Compare the recursive tukey FFT with a reference transform on random input.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Transform sizes to check, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = vec![8usize])]
    sizes: Vec<usize>,

    /// Seed for the random input (fresh entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Reference transform to compare against
    #[arg(long, value_enum, default_value_t = OracleKind::Rustfft)]
    oracle: OracleKind,

    /// Draw complex samples instead of real ones
    #[arg(long)]
    complex: bool,

    /// Absolute tolerance (overrides TUKEY_ABS_TOL)
    #[arg(long, value_parser = parse_tolerance)]
    abs_tol: Option<f64>,

    /// Relative tolerance (overrides TUKEY_REL_TOL)
    #[arg(long, value_parser = parse_tolerance)]
    rel_tol: Option<f64>,

    /// Loosen the tolerance by 1 + log2(n) for each size
    #[arg(long)]
    scale_tolerance: bool,

    /// Print input, computed and reference spectra
    #[arg(long)]
    show: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: &Args) -> Result<bool, Box<dyn Error>> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let oracle = args.oracle.build();

    let mut failures = 0usize;
    for &size in &args.sizes {
        let tol = resolve_tolerance(args.abs_tol, args.rel_tol, args.scale_tolerance, size);
        let report = run_check(&mut rng, size, oracle.as_ref(), tol, args.complex)?;
        if !report.verdict.passed {
            failures += 1;
        }
        println!("{}", format_report(&report, args.show));
    }

    if failures == 0 {
        println!("all {} size(s) agree", args.sizes.len());
    } else {
        println!("{} of {} size(s) diverged", failures, args.sizes.len());
    }
    Ok(failures == 0)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}
