use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the ride matching workspace",
    long_about = "A unified CLI for running the matcher, benchmarks,\n\
                  and CI checks in the ride matching workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match drivers and riders from a data directory
    Run {
        /// Directory holding drivers.txt and riders.txt
        #[arg(long, env = "RIDE_MATCH_DATA_DIR", default_value = "data")]
        data_dir: String,
    },
    /// Match a random sample of the demo drivers and riders
    Sample {
        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run Criterion benchmarks
    Bench,
    /// Run CI checks (fmt, clippy, tests, demo run, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Run the matcher on a seeded sample
    Demo,
    /// Run benchmarks
    Bench,
    /// Run check + demo + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_matcher(extra: &[&str]) {
    let mut args = vec!["run", "-p", "match_cli", "--release", "--"];
    args.extend_from_slice(extra);
    run_cargo(&args);
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test match_core");
    run_cargo(&["test", "-p", "match_core"]);

    step("Test match_cli");
    run_cargo(&["test", "-p", "match_cli"]);
}

fn ci_demo() {
    step("Match seeded sample (table)");
    run_matcher(&["sample", "--seed", "42"]);

    step("Match seeded sample (json)");
    run_matcher(&["sample", "--seed", "42", "--format", "json"]);
}

fn ci_bench() {
    step("Run benchmarks");
    run_cargo(&["bench", "--package", "match_core", "--bench", "matching"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { data_dir } => {
            run_matcher(&["files", "--data-dir", &data_dir]);
        }
        Commands::Sample { seed } => {
            let seed = seed.map(|s| s.to_string());
            match &seed {
                Some(seed) => run_matcher(&["sample", "--seed", seed]),
                None => run_matcher(&["sample"]),
            }
        }
        Commands::Bench => {
            run_cargo(&["bench", "--package", "match_core", "--bench", "matching"]);
        }
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Demo => ci_demo(),
                CiJob::Bench => ci_bench(),
                CiJob::All => {
                    ci_check();
                    ci_demo();
                    ci_bench();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}
