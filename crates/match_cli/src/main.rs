use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use match_core::data_files::{DataDir, DEFAULT_DATA_DIR};
use match_core::report::{cgi_error, MatchReport};
use match_core::roster::Roster;
use match_core::sampling::SampleParams;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DATA_FILES_NOT_FOUND: &str = "Data files not found";

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "ride_match",
    about = "Greedy nearest-driver ride matching",
    long_about = "Matches riders to the nearest driver with enough free seats.\n\
                  Riders are served in input order; earlier riders get first pick."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format for the match report
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Directory holding drivers.txt and riders.txt
    #[arg(long, global = true, env = "RIDE_MATCH_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Set by web servers for CGI requests; switches output to a JSON response
    #[arg(long, env = "REQUEST_METHOD", hide = true)]
    request_method: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load drivers and riders from the data directory and match them (default)
    Files,
    /// Match a random sample of the built-in demo drivers and riders
    Sample {
        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,
        /// Minimum and maximum number of drivers
        #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
        drivers: Option<Vec<usize>>,
        /// Minimum and maximum number of riders
        #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
        riders: Option<Vec<usize>>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

// ── helpers ────────────────────────────────────────────────────────

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ride_match=info,match_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn sample_params(
    seed: Option<u64>,
    drivers: Option<Vec<usize>>,
    riders: Option<Vec<usize>>,
) -> SampleParams {
    let mut params = SampleParams::default();
    if let Some(seed) = seed {
        params = params.with_seed(seed);
    }
    if let Some([min, max]) = drivers.as_deref() {
        params = params.with_driver_range(*min, *max);
    }
    if let Some([min, max]) = riders.as_deref() {
        params = params.with_rider_range(*min, *max);
    }
    params
}

/// Load the data directory into a roster, or `None` when either side is missing or empty.
fn load_roster(data_dir: &DataDir) -> Option<Roster> {
    let (drivers, riders) = match data_dir.load() {
        Ok(records) => records,
        Err(error) => {
            warn!(%error, "could not load data files");
            return None;
        }
    };
    if drivers.is_empty() || riders.is_empty() {
        warn!(
            drivers = drivers.len(),
            riders = riders.len(),
            "data files hold no drivers or no riders"
        );
        return None;
    }
    match Roster::from_records(drivers, riders) {
        Ok(roster) => Some(roster),
        Err(error) => {
            warn!(%error, "rejecting data files");
            None
        }
    }
}

/// Write the match report to `out`. CGI requests always get the JSON response.
fn write_report<W: Write>(
    out: &mut W,
    report: &MatchReport,
    roster: &Roster,
    format: OutputFormat,
    cgi: bool,
) -> Result<(), Box<dyn Error>> {
    if cgi {
        write!(out, "{}", report.to_cgi_response()?)?;
        return Ok(());
    }
    match format {
        OutputFormat::Table => {
            write!(out, "{}", report.render_table())?;
            let unmatched: Vec<&str> = roster.unmatched_riders().map(|r| r.name.as_str()).collect();
            if !unmatched.is_empty() {
                writeln!(out, "Unmatched riders: {}", unmatched.join(", "))?;
            }
        }
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
        OutputFormat::Csv => report.write_csv(&mut *out)?,
    }
    Ok(())
}

/// Write a failure message: a JSON error body on `out` for CGI, plain text on `err` otherwise.
fn write_failure<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    cgi: bool,
    message: &str,
) -> io::Result<()> {
    if cgi {
        write!(out, "{}", cgi_error(message))
    } else {
        writeln!(err, "Error: {message}")
    }
}

fn fail(cgi: bool, message: &str) -> ! {
    let _ = write_failure(&mut io::stdout(), &mut io::stderr(), cgi, message);
    exit(1);
}

// ── main ───────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing();

    let cgi = cli.request_method.is_some();
    let mut roster = match cli.command.unwrap_or(Commands::Files) {
        Commands::Files => {
            let data_dir = DataDir::new(&cli.data_dir);
            match load_roster(&data_dir) {
                Some(roster) => roster,
                None if cgi => fail(cgi, DATA_FILES_NOT_FOUND),
                None => fail(cgi, "Could not load driver or rider data."),
            }
        }
        Commands::Sample {
            seed,
            drivers,
            riders,
        } => {
            let mut roster = Roster::new();
            roster.load_sample(&sample_params(seed, drivers, riders));
            roster
        }
    };

    let stats = roster.stats();
    info!(
        drivers = stats.drivers,
        riders = stats.riders,
        "running matching"
    );
    if let Err(error) = roster.run_matching() {
        fail(cgi, &error.to_string());
    }

    let report = MatchReport::from_roster(&roster);
    write_report(&mut io::stdout().lock(), &report, &roster, cli.format, cgi)
}
