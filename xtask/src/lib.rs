use std::env;
use std::process::Command;

/// Options used to configure cargo commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub features: Vec<String>,
}

impl BuildConfig {
    /// Join features into a single string suitable for passing to cargo.
    pub fn features_arg(&self) -> Option<String> {
        if self.features.is_empty() {
            None
        } else {
            Some(self.features.join(" "))
        }
    }
}

/// Read extra features from `TUKEY_FEATURES`.
pub fn detect_config() -> BuildConfig {
    let extra = env::var("TUKEY_FEATURES").unwrap_or_default();
    compute_config(&extra)
}

/// Compute a [`BuildConfig`] from a whitespace separated feature list.
pub fn compute_config(extra: &str) -> BuildConfig {
    let mut features: Vec<String> = Vec::new();
    for feat in extra.split_whitespace() {
        if !features.iter().any(|f| f == feat) {
            features.push(feat.to_string());
        }
    }
    BuildConfig { features }
}

pub fn build_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["build", "--workspace"]);
    if let Some(f) = cfg.features_arg() {
        cmd.arg("--features").arg(f);
    }
    cmd
}

pub fn test_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["test", "--workspace"]);
    if let Some(f) = cfg.features_arg() {
        cmd.arg("--features").arg(f);
    }
    cmd
}

pub fn clippy_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["clippy", "--workspace", "--all-targets", "--all-features"]);
    cmd
}

pub fn fmt_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["fmt", "--all"]);
    cmd
}

/// Run the criterion suite. `powers` restricts sizes to `2^p` for each listed `p`.
pub fn bench_command(powers: Option<&str>) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--manifest-path", "tukey-bench/Cargo.toml"]);
    if let Some(p) = powers {
        cmd.env("TUKEY_BENCH_POWERS", p);
    }
    cmd
}

pub fn sanity_command(sizes: &str, oracle: &str) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args([
        "run",
        "-r",
        "-p",
        "sanity-check",
        "--",
        "--sizes",
        sizes,
        "--oracle",
        oracle,
    ]);
    cmd
}
