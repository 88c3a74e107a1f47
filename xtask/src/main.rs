use clap::{Parser, Subcommand};
#[cfg(not(test))]
use xtask::*;

#[derive(Parser)]
#[command(author, version, about = "Development tasks for tukey")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Build,
    Test,
    Clippy,
    Fmt,
    Analyze,
    Bench {
        /// Comma separated powers of two to benchmark, e.g. `4,8,12`
        #[arg(long)]
        powers: Option<String>,
    },
    Sanity {
        /// Comma separated transform sizes
        #[arg(long, default_value = "1,2,4,8,16,32")]
        sizes: String,
        /// Reference transform (`direct` or `rustfft`)
        #[arg(long, default_value = "rustfft")]
        oracle: String,
    },
}

#[cfg(not(test))]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = detect_config();

    let status = match cli.command {
        Commands::Build => build_command(&cfg).status(),
        Commands::Test => test_command(&cfg).status(),
        Commands::Clippy => clippy_command().status(),
        Commands::Fmt => fmt_command().status(),
        Commands::Analyze => {
            let fmt = fmt_command().status()?;
            if !fmt.success() {
                Ok(fmt)
            } else {
                clippy_command().status()
            }
        }
        Commands::Bench { powers } => bench_command(powers.as_deref()).status(),
        Commands::Sanity { sizes, oracle } => sanity_command(&sizes, &oracle).status(),
    }?;

    if !status.success() {
        anyhow::bail!("task failed with {}", status);
    }
    Ok(())
}
