//! CLI entry point for the CGPA rater.
//!
//! Provides subcommands for converting a single CGPA, printing the grade
//! reference chart, converting a batch of values, and an interactive prompt.

use anyhow::Result;
use cgpa_rater::batch::convert_reader;
use cgpa_rater::input::{InputError, parse_cgpa};
use cgpa_rater::output::{Report, render_chart, render_json, render_text};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::io::{BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Exit status for input that failed validation.
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser)]
#[command(name = "cgpa_rater")]
#[command(about = "SPPU CGPA to percentage calculator (2024 engineering pattern)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single CGPA to percentage and grade
    Convert {
        /// CGPA between 0.00 and 10.00
        #[arg(value_name = "CGPA", allow_hyphen_values = true)]
        cgpa: String,

        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the grade reference chart
    Chart,
    /// Convert one CGPA per line (or CSV first column) and write CSV to stdout
    Batch {
        /// Input file; reads stdin when omitted
        #[arg(value_name = "FILE")]
        input: Option<String>,
    },
    /// Prompt for CGPA values until `quit` or end of input
    Interactive,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_logging()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { cgpa, json } => convert(&cgpa, json),
        Commands::Chart => {
            print!("{}", render_chart());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Batch { input } => batch(input.as_deref()),
        Commands::Interactive => interactive(),
    }
}

/// Logging setup: colored stderr, plus a JSON rolling log file when `LOG_FILE_PATH` is set.
fn init_logging() -> Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let log_dir = Path::new(&log_file_path)
                .parent()
                .unwrap_or(Path::new("logs"));
            let log_file_name = Path::new(&log_file_path)
                .file_name()
                .unwrap_or(OsStr::new("cgpa_rater.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(
                    EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?),
                );
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}

/// Validates and converts a single value, printing text or JSON.
#[tracing::instrument(fields(cgpa = %raw))]
fn convert(raw: &str, json: bool) -> Result<ExitCode> {
    let cgpa = match parse_cgpa(raw) {
        Ok(cgpa) => cgpa,
        Err(e) => return Ok(report_input_error(&e)),
    };

    let result = cgpa.compute();
    info!(grade = result.grade_label(), percentage = ?result.percentage(), "Converted");

    if json {
        println!("{}", render_json(&Report::new(cgpa.value(), result))?);
    } else {
        print!("{}", render_text(cgpa.value(), &result));
    }

    Ok(ExitCode::SUCCESS)
}

fn report_input_error(e: &InputError) -> ExitCode {
    warn!(error = ?e, "Input rejected");
    eprintln!("{e}");
    ExitCode::from(EXIT_INVALID_INPUT)
}

/// Converts every record from a file or stdin and writes CSV rows to stdout.
#[tracing::instrument]
fn batch(input: Option<&str>) -> Result<ExitCode> {
    let stdout = std::io::stdout().lock();

    let summary = match input {
        Some(path) => convert_reader(std::fs::File::open(path)?, stdout)?,
        None => convert_reader(std::io::stdin().lock(), stdout)?,
    };

    info!(
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        rejected = summary.rejected,
        mean_percentage = summary.mean_percentage,
        stddev_percentage = summary.stddev_percentage,
        "Batch summary"
    );

    Ok(ExitCode::SUCCESS)
}

/// Line-oriented stand-in for the input form. Each submitted line replaces
/// the previous result.
fn interactive() -> Result<ExitCode> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("SPPU CGPA to Percentage Calculator");
    println!("Enter a CGPA (0.00 - 10.00), or `quit` to exit.");

    let mut lines = stdin.lock().lines();
    loop {
        print!("CGPA> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;
        let entry = line.trim();

        if entry.eq_ignore_ascii_case("quit") || entry.eq_ignore_ascii_case("exit") {
            break;
        }
        match parse_cgpa(entry) {
            Ok(cgpa) => print!("{}", render_text(cgpa.value(), &cgpa.compute())),
            Err(e) => {
                debug!(entry, error = ?e, "Entry rejected");
                println!("{e}");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
